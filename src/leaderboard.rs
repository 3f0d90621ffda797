use crate::logger;
use crate::models::LeaderboardEntry;

/// In-memory ranking of finished games, highest score first.
///
/// Entries with equal scores keep the order they were inserted in.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` after every entry with a score at least as high and
    /// returns its 0-based rank.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> usize {
        let rank = self
            .entries
            .partition_point(|existing| existing.score >= entry.score);
        logger::log(&format!(
            "Leaderboard: {} ({}) at rank {}",
            entry.name,
            entry.score,
            rank + 1
        ));
        self.entries.insert(rank, entry);
        rank
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn format_entry(rank: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "{:>2}. {}: {} points ({})",
        rank + 1,
        entry.name,
        entry.score,
        entry.tier.label()
    )
}
