#[cfg(test)]
mod ui_integration_tests {
    use crate::config::AppConfig;
    use crate::models::{Feedback, Operator, Problem};
    use crate::{App, AppState, Difficulty};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn set_problem(app: &mut App, solution: f64) {
        let session = app.session.as_mut().expect("game in progress");
        session.current_problem = Problem {
            operand_a: solution as i64 - 1,
            operand_b: 1,
            operator: Operator::Add,
            solution,
        };
    }

    /// Renders the current screen into an in-memory buffer and returns its text.
    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| crate::ui::draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_full_round_reaches_leaderboard() {
        let mut app = App::new(AppConfig::default());
        assert_eq!(app.state, AppState::Menu);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Game);
        assert_eq!(app.session.as_ref().unwrap().tier, Difficulty::Easy);
        assert_eq!(app.session.as_ref().unwrap().score, 0);

        set_problem(&mut app, 7.0);
        type_text(&mut app, "7");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.as_ref().unwrap().score, 10);

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.score, 10);
        assert_eq!(session.last_feedback, Some(Feedback::Incorrect));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::NameEntry);

        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Leaderboard);
        assert!(app.session.is_none());

        let entries = app.leaderboard.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Ada");
        assert_eq!(entries[0].score, 10);
        assert_eq!(app.last_rank, Some(0));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.last_rank, None);
    }

    #[test]
    fn test_menu_navigation_selects_tier() {
        let mut app = App::new(AppConfig::default());

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_menu_index, 0);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_menu_index, 2);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.as_ref().unwrap().tier, Difficulty::Hard);
    }

    #[test]
    fn test_menu_navigation_stops_at_last_item() {
        let mut app = App::new(AppConfig::default());
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_menu_index, 3);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Leaderboard);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_number_shortcuts_start_games() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state, AppState::Game);
        assert_eq!(app.session.as_ref().unwrap().tier, Difficulty::Medium);
    }

    #[test]
    fn test_configured_default_difficulty_is_preselected() {
        let mut config = AppConfig::default();
        config.game.default_difficulty = Difficulty::Medium;
        let app = App::new(config);
        assert_eq!(app.selected_menu_index, 1);
    }

    #[test]
    fn test_empty_name_uses_configured_default() {
        let mut config = AppConfig::default();
        config.player.default_name = "Apprentice".to_string();
        let mut app = App::new(config);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.leaderboard.entries()[0].name, "Apprentice");
        assert_eq!(app.leaderboard.entries()[0].score, 0);
    }

    #[test]
    fn test_dismissed_prompt_records_default_name() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Esc);
        type_text(&mut app, "Mer");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state, AppState::Leaderboard);
        assert_eq!(app.leaderboard.entries()[0].name, "Player");
        assert!(app.name_input.is_empty());
    }

    #[test]
    fn test_leaderboard_ranks_successive_games() {
        let mut app = App::new(AppConfig::default());

        for (name, correct) in [("Low", 1), ("High", 3), ("Mid", 2)] {
            press(&mut app, KeyCode::Char('1'));
            for _ in 0..correct {
                set_problem(&mut app, 5.0);
                type_text(&mut app, "5");
                press(&mut app, KeyCode::Enter);
            }
            press(&mut app, KeyCode::Esc);
            type_text(&mut app, name);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }

        let ranked: Vec<(&str, u32)> = app
            .leaderboard
            .entries()
            .iter()
            .map(|e| (e.name.as_str(), e.score))
            .collect();
        assert_eq!(ranked, [("High", 30), ("Mid", 20), ("Low", 10)]);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('1'));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_quits_only_from_menu() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.as_ref().unwrap().input.as_str(), "q");

        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_menu() {
        let app = App::new(AppConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Arcane Mathematics"));
        assert!(screen.contains("> Easy"));
        assert!(screen.contains("Medium"));
        assert!(screen.contains("Leaderboard"));
    }

    #[test]
    fn test_render_game_screen() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('1'));
        set_problem(&mut app, 7.0);
        type_text(&mut app, "8");
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Difficulty: EASY"));
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("6 + 1 = ?"));
        assert!(screen.contains("Incorrect! Try again."));
    }

    #[test]
    fn test_render_name_prompt_and_leaderboard() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Esc);
        assert!(render(&app).contains("Enter your name"));

        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("1. Ada: 0 points (Easy)"));
    }

    #[test]
    fn test_render_empty_leaderboard() {
        let mut app = App::new(AppConfig::default());
        press(&mut app, KeyCode::Char('l'));
        assert!(render(&app).contains("No games played yet"));
    }
}
