use anyhow::{Context, Result};
use arcane_math::{App, config, logger, ui};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> Result<()> {
    let cfg = config::load_config()?;
    if cfg.logging.enabled {
        logger::init(&cfg.logging.path)
            .with_context(|| format!("Failed to open log file {}", cfg.logging.path.display()))?;
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(cfg));

    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

fn restore_terminal() -> arcane_math::error::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    logger::log("Arcane Mathematics started");

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }

    logger::log(&format!(
        "Exiting with {} leaderboard entries",
        app.leaderboard.len()
    ));
    Ok(())
}
