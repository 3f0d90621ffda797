use crate::input::InputBuffer;
use crate::logger;
use crate::models::{
    AppState, DEFAULT_PLAYER_NAME, Difficulty, Feedback, LeaderboardEntry, POINTS_PER_CORRECT,
    Problem,
};
use crate::problem::{generate_problem_with, round_to_cents};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// State of one playthrough: tier, running score and the problem on screen.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tier: Difficulty,
    pub score: u32,
    pub current_problem: Problem,
    pub input: InputBuffer,
    pub last_feedback: Option<Feedback>,
}

/// Parses a typed answer. Anything that is not a finite number yields `None`
/// and can never match a solution.
pub fn parse_answer(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(round_to_cents)
}

impl GameSession {
    pub fn start(tier: Difficulty) -> Self {
        Self::start_with(tier, &mut rand::thread_rng())
    }

    pub fn start_with<R: Rng + ?Sized>(tier: Difficulty, rng: &mut R) -> Self {
        let current_problem = generate_problem_with(tier, rng);
        logger::log(&format!("Game started ({}): {}", tier.label(), current_problem));
        Self {
            tier,
            score: 0,
            current_problem,
            input: InputBuffer::new(),
            last_feedback: None,
        }
    }

    pub fn submit_answer(&mut self, raw: &str) -> bool {
        self.submit_answer_with(raw, &mut rand::thread_rng())
    }

    /// Checks `raw` against the current solution. A correct answer scores
    /// and replaces the problem; an incorrect one leaves score and problem
    /// untouched.
    pub fn submit_answer_with<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) -> bool {
        let correct = parse_answer(raw) == Some(self.current_problem.solution);

        if correct {
            self.score += POINTS_PER_CORRECT;
            self.current_problem = generate_problem_with(self.tier, rng);
            self.input.clear();
            self.last_feedback = Some(Feedback::Correct);
        } else {
            self.last_feedback = Some(Feedback::Incorrect);
        }

        logger::log(&format!(
            "Answer {:?} -> {} (score {})",
            raw,
            if correct { "correct" } else { "incorrect" },
            self.score
        ));
        correct
    }

    /// Submits whatever is in the answer field. Blank input is ignored.
    pub fn submit_input(&mut self) -> Option<bool> {
        if self.input.as_str().trim().is_empty() {
            return None;
        }
        let raw = self.input.text.clone();
        Some(self.submit_answer(&raw))
    }

    pub fn end(&self, player_name: Option<&str>) -> LeaderboardEntry {
        self.end_with_default(player_name, DEFAULT_PLAYER_NAME)
    }

    pub fn end_with_default(&self, player_name: Option<&str>, default_name: &str) -> LeaderboardEntry {
        let name = player_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(default_name);
        logger::log(&format!("Game ended: {} scored {}", name, self.score));
        LeaderboardEntry {
            name: name.to_string(),
            score: self.score,
            tier: self.tier,
        }
    }
}

pub fn handle_game_input(session: &mut GameSession, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::NameEntry;
        }
        KeyCode::Enter => {
            session.submit_input();
        }
        code => {
            if session.input.handle_key(code) {
                session.last_feedback = None;
            }
        }
    }
}
