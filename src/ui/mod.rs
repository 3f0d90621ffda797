pub mod layout;
mod game;
mod leaderboard;
mod menu;
mod name_prompt;

pub use game::draw_game;
pub use layout::{calculate_game_chunks, calculate_screen_chunks, centered_rect};
pub use leaderboard::draw_leaderboard;
pub use menu::draw_menu;
pub use name_prompt::draw_name_prompt;

use crate::app::App;
use crate::models::AppState;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, app),
        AppState::Game => {
            if let Some(session) = &app.session {
                draw_game(f, session);
            }
        }
        AppState::NameEntry => {
            if let Some(session) = &app.session {
                draw_game(f, session);
                draw_name_prompt(
                    f,
                    &app.name_input,
                    session.score,
                    &app.config.player.default_name,
                );
            }
        }
        AppState::Leaderboard => draw_leaderboard(f, &app.leaderboard, app.last_rank),
    }
}

fn title_paragraph(title: &str) -> Paragraph<'_> {
    Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Key hints rendered as `key action  key action`.
fn help_line(bindings: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(bindings.len() * 2);
    for (key, action) in bindings {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(format!(" {}  ", action)));
    }
    Line::from(spans)
}
