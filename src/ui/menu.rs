use crate::app::{App, MENU_ITEMS};
use crate::ui::layout::calculate_screen_chunks;
use crate::ui::{help_line, title_paragraph};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw_menu(f: &mut Frame, app: &App) {
    let layout = calculate_screen_chunks(f.area());

    f.render_widget(title_paragraph("Arcane Mathematics"), layout.header_area);

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.selected_menu_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if i == app.selected_menu_index { "> " } else { "  " };
            ListItem::new(format!("{}{}", marker, item.label())).style(style)
        })
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title("Select a Difficulty to Start");
    if let Some(best) = app.leaderboard.entries().first() {
        block = block.title_bottom(
            Line::from(format!(" Best: {} ({}) ", best.score, best.name)).right_aligned(),
        );
    }

    let list = List::new(items).block(block);
    f.render_widget(list, layout.content_area);

    let help = Paragraph::new(vec![help_line(&[
        ("↑/↓", "Navigate"),
        ("Enter", "Select"),
        ("1/2/3", "Quick Start"),
        ("l", "Leaderboard"),
        ("q/Esc", "Quit"),
    ])])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
