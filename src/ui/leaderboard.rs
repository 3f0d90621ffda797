use crate::leaderboard::{Leaderboard, format_entry};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::{help_line, title_paragraph};
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const MAX_NAME_WIDTH: usize = 24;

pub fn draw_leaderboard(f: &mut Frame, leaderboard: &Leaderboard, highlight: Option<usize>) {
    let layout = calculate_screen_chunks(f.area());

    f.render_widget(title_paragraph("Leaderboard"), layout.header_area);

    let items: Vec<ListItem> = if leaderboard.is_empty() {
        vec![ListItem::new("No games played yet").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        leaderboard
            .entries()
            .iter()
            .enumerate()
            .map(|(rank, entry)| {
                let mut shown = entry.clone();
                shown.name = truncate_string(&entry.name, MAX_NAME_WIDTH);
                let style = if highlight == Some(rank) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format_entry(rank, &shown)).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(list, layout.content_area);

    let help = Paragraph::new(vec![help_line(&[
        ("Enter/m", "Return to Menu"),
        ("Ctrl+C", "Exit App"),
    ])])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
