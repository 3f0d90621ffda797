use crate::input::InputBuffer;
use crate::ui::help_line;
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Modal asking for the player's name, drawn over the game screen.
pub fn draw_name_prompt(f: &mut Frame, name_input: &InputBuffer, score: u32, default_name: &str) {
    let area = centered_rect(50, 11, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new(format!("Game Over - Score: {}", score))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let name_line = if name_input.is_empty() {
        Line::styled(default_name.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Line::from(name_input.as_str())
    };
    let name = Paragraph::new(name_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter your name"),
    );
    f.render_widget(name, chunks[1]);
    f.set_cursor_position((
        chunks[1].x + 1 + name_input.cursor_column() as u16,
        chunks[1].y + 1,
    ));

    let help = Paragraph::new(vec![help_line(&[("Enter", "Save"), ("Esc", "Skip")])])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
