pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod leaderboard;
pub mod logger;
pub mod models;
pub mod problem;
pub mod session;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use app::{App, MENU_ITEMS, MenuItem};
pub use config::{AppConfig, load_config};
pub use error::AppError;
pub use leaderboard::Leaderboard;
pub use models::{AppState, Difficulty, LeaderboardEntry, Operator, Problem};
pub use problem::{generate_problem, generate_problem_with};
pub use session::{GameSession, handle_game_input};
pub use ui::draw;
