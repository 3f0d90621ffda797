use crate::models::Feedback;
use crate::session::GameSession;
use crate::ui::help_line;
use crate::ui::layout::calculate_game_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_game(f: &mut Frame, session: &GameSession) {
    let layout = calculate_game_chunks(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::from(format!("Difficulty: {}", session.tier)),
        Span::from("    "),
        Span::styled(
            format!("Score: {}", session.score),
            Style::default().fg(Color::Magenta),
        ),
    ]))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    // Vertically center the expression inside its box
    let inner_height = layout.problem_area.height.saturating_sub(2) as usize;
    let mut problem_text = Text::default();
    for _ in 0..inner_height.saturating_sub(1) / 2 {
        problem_text.push_line(Line::from(""));
    }
    problem_text.push_line(Line::from(Span::styled(
        format!("{} = ?", session.current_problem),
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
    )));
    let problem = Paragraph::new(problem_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Problem"));
    f.render_widget(problem, layout.problem_area);

    let answer = Paragraph::new(if session.input.is_empty() {
        Line::from(Span::styled(
            "[Your Answer]",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(session.input.as_str())
    })
    .block(Block::default().borders(Borders::ALL).title("Your Answer"));
    f.render_widget(answer, layout.answer_area);

    let cursor_x = layout.answer_area.x + 1 + session.input.cursor_column() as u16;
    let cursor_y = layout.answer_area.y + 1;
    f.set_cursor_position((cursor_x, cursor_y));

    let feedback = match session.last_feedback {
        Some(fb @ Feedback::Correct) => Paragraph::new(fb.message())
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Some(fb @ Feedback::Incorrect) => Paragraph::new(fb.message())
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        None => Paragraph::new(""),
    };
    f.render_widget(
        feedback
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        layout.feedback_area,
    );

    let help = Paragraph::new(vec![help_line(&[
        ("Enter", "Submit Answer"),
        ("Esc", "End Game"),
        ("Ctrl+C", "Exit App"),
    ])])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
