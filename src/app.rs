use crate::config::AppConfig;
use crate::input::InputBuffer;
use crate::leaderboard::Leaderboard;
use crate::models::{AppState, Difficulty};
use crate::session::{GameSession, handle_game_input};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(Difficulty),
    Leaderboard,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::Play(Difficulty::Easy),
    MenuItem::Play(Difficulty::Medium),
    MenuItem::Play(Difficulty::Hard),
    MenuItem::Leaderboard,
];

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play(tier) => tier.label(),
            MenuItem::Leaderboard => "Leaderboard",
        }
    }
}

/// Owns everything the screens read and mutate. Key events go through
/// [`App::handle_key`]; draw functions only borrow it.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub config: AppConfig,
    pub selected_menu_index: usize,
    pub session: Option<GameSession>,
    pub leaderboard: Leaderboard,
    pub name_input: InputBuffer,
    /// Rank of the most recent entry, highlighted on the leaderboard screen.
    pub last_rank: Option<usize>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let selected_menu_index = MENU_ITEMS
            .iter()
            .position(|item| *item == MenuItem::Play(config.game.default_difficulty))
            .unwrap_or(0);
        Self {
            state: AppState::Menu,
            config,
            selected_menu_index,
            session: None,
            leaderboard: Leaderboard::new(),
            name_input: InputBuffer::new(),
            last_rank: None,
            should_quit: false,
        }
    }

    pub fn start_game(&mut self, tier: Difficulty) {
        self.session = Some(GameSession::start(tier));
        self.state = AppState::Game;
    }

    /// Ends the current game with the typed name and records it on the
    /// leaderboard.
    pub fn finish_game(&mut self) {
        if let Some(session) = self.session.take() {
            let entry = session.end_with_default(
                Some(self.name_input.as_str()),
                &self.config.player.default_name,
            );
            self.last_rank = Some(self.leaderboard.insert(entry));
        }
        self.name_input.clear();
        self.state = AppState::Leaderboard;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state {
            AppState::Menu => self.handle_menu_key(key.code),
            AppState::Game => {
                if let Some(session) = self.session.as_mut() {
                    handle_game_input(session, key, &mut self.state);
                } else {
                    self.state = AppState::Menu;
                }
            }
            AppState::NameEntry => match key.code {
                KeyCode::Enter => self.finish_game(),
                // Dismissing the prompt still ends the game, under the default name
                KeyCode::Esc => {
                    self.name_input.clear();
                    self.finish_game();
                }
                code => {
                    self.name_input.handle_key(code);
                }
            },
            AppState::Leaderboard => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => {
                    self.last_rank = None;
                    self.state = AppState::Menu;
                }
                _ => {}
            },
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.selected_menu_index = self.selected_menu_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_menu_index < MENU_ITEMS.len() - 1 {
                    self.selected_menu_index += 1;
                }
            }
            KeyCode::Enter => self.activate(MENU_ITEMS[self.selected_menu_index]),
            KeyCode::Char('1') => self.activate(MenuItem::Play(Difficulty::Easy)),
            KeyCode::Char('2') => self.activate(MenuItem::Play(Difficulty::Medium)),
            KeyCode::Char('3') => self.activate(MenuItem::Play(Difficulty::Hard)),
            KeyCode::Char('l') => self.activate(MenuItem::Leaderboard),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::Play(tier) => self.start_game(tier),
            MenuItem::Leaderboard => {
                self.last_rank = None;
                self.state = AppState::Leaderboard;
            }
        }
    }
}
