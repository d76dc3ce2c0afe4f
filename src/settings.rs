//! Persisted-state contract shared with the settings collaborator.
//!
//! The engine never reads or writes files; it produces and consumes this
//! plain data shape, and the host decides where it lives. Coordinates are
//! integer lattice indices - the canonical dot identity - so snapshots
//! survive serialization without floating-point drift.

use crate::board::invariants::{BoardInvariants, InvariantSet};
use crate::board::{BoardState, Dot, Line};
use crate::grid::Lattice;
use crate::session::GameSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error that can occur when restoring a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SettingsError {
    /// The snapshot describes a board no legal play could have produced.
    #[display("Saved board violates invariant: {_0}")]
    CorruptBoard(String),
}

impl std::error::Error for SettingsError {}

/// A finished game worth remembering: the score and the board that
/// achieved it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiScoreEntry {
    /// Which game achieved the score.
    pub game_id: i32,
    /// When the score was recorded; supplied by the caller, the engine
    /// keeps no clock.
    pub timestamp: DateTime<Utc>,
    /// The score achieved.
    pub hi_score: usize,
    /// The dots on the final board.
    pub dots: Vec<Dot>,
    /// The lines on the final board.
    pub lines: Vec<Line>,
}

/// The persisted game state, read once at startup and rewritten after
/// every committed move and every reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Identifier of the game in progress.
    #[serde(default)]
    pub game_id: i32,
    /// Best score across games.
    pub hi_score: usize,
    /// The current board's dots.
    pub dots: Vec<Dot>,
    /// The current board's lines.
    pub lines: Vec<Line>,
    /// Past record scores, most recent last.
    #[serde(default)]
    pub hi_score_history: Vec<HiScoreEntry>,
}

impl Settings {
    /// Captures the current session state as a snapshot.
    ///
    /// Dots and lines are sorted so equal boards serialize identically.
    #[instrument(skip(session))]
    pub fn capture(session: &GameSession) -> Self {
        let (dots, lines) = sorted_parts(session.board());
        Self {
            game_id: *session.game_id(),
            hi_score: *session.hi_score(),
            dots,
            lines,
            hi_score_history: Vec::new(),
        }
    }

    /// Rebuilds a session from this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::CorruptBoard`] when the snapshot violates
    /// a board invariant - a line with uneven spacing, overlapping lines,
    /// or dots and lines that do not account for each other.
    #[instrument(skip(self, lattice))]
    pub fn restore(&self, lattice: Lattice) -> Result<GameSession, SettingsError> {
        let board = BoardState::from_parts(
            self.dots.iter().copied().collect(),
            self.lines.iter().cloned().collect(),
        );
        BoardInvariants::check_all(&board).map_err(|violations| {
            let detail = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SettingsError::CorruptBoard(detail)
        })?;
        Ok(GameSession::from_parts(
            board,
            lattice,
            self.hi_score,
            self.game_id,
        ))
    }

    /// Appends a finished game to the high-score history.
    pub fn record_hi_score(&mut self, entry: HiScoreEntry) {
        self.hi_score_history.push(entry);
    }

    /// Serializes the snapshot to JSON for the settings collaborator.
    ///
    /// # Errors
    ///
    /// Propagates the underlying serializer error.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a snapshot from the settings collaborator's JSON.
    ///
    /// # Errors
    ///
    /// Propagates the underlying parser error.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl HiScoreEntry {
    /// Records the final state of a finished game.
    pub fn capture(session: &GameSession, timestamp: DateTime<Utc>) -> Self {
        let (dots, lines) = sorted_parts(session.board());
        Self {
            game_id: *session.game_id(),
            timestamp,
            hi_score: session.score(),
            dots,
            lines,
        }
    }
}

fn sorted_parts(board: &BoardState) -> (Vec<Dot>, Vec<Line>) {
    let mut dots: Vec<Dot> = board.dots().iter().copied().collect();
    dots.sort_by_key(|d| (d.x, d.y));
    let mut lines: Vec<Line> = board.lines().iter().cloned().collect();
    lines.sort_by_key(|l| (l.x1(), l.y1(), l.x2(), l.y2()));
    (dots, lines)
}
