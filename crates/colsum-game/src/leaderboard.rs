//! The capped high-score table.

use serde::{Deserialize, Serialize};

/// Maximum number of entries a [`Leaderboard`] retains.
pub const MAX_LEADERBOARD_ENTRIES: usize = 5;

/// One row of the high-score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// The name the player entered.
    pub name: String,
    /// The final session score.
    pub score: u32,
    /// The date the score was set, already formatted by the host.
    pub date: String,
}

/// An ordered list of the best final scores, capped at
/// [`MAX_LEADERBOARD_ENTRIES`].
///
/// Entries are kept sorted by score descending; ties keep their insertion
/// order, so an older equal score outranks a newer one. Storage is the
/// host's concern: the board serializes as a flat list of entries and is
/// handed back verbatim on reload.
///
/// # Examples
///
/// ```
/// use colsum_game::{Leaderboard, LeaderboardEntry};
///
/// let mut board = Leaderboard::new();
/// let accepted = board.record(LeaderboardEntry {
///     name: "Ada".into(),
///     score: 120,
///     date: "2026-08-29".into(),
/// });
/// assert!(accepted);
/// assert_eq!(board.entries()[0].score, 120);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts `entry` at its rank, dropping anything pushed past the cap.
    ///
    /// Returns `true` if the entry made the board, `false` if the board is
    /// full of scores at least as good.
    pub fn record(&mut self, entry: LeaderboardEntry) -> bool {
        let rank = self
            .entries
            .iter()
            .position(|existing| existing.score < entry.score)
            .unwrap_or(self.entries.len());
        if rank >= MAX_LEADERBOARD_ENTRIES {
            return false;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_LEADERBOARD_ENTRIES);
        true
    }

    /// Returns the entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Returns `true` if the board has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
