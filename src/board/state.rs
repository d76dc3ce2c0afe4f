//! Board state - the committed dot and line sets, undo bookkeeping, score.

use super::types::{Dot, Line};
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// The fixed starting pattern as `(column, row)` lattice pairs.
///
/// Each pair is also mirrored across the main diagonal, completing the
/// classic 36-dot Morpion cross on a 10x10 patch of the lattice.
const INITIAL_PATTERN: [(i32, i32); 19] = [
    (0, 3),
    (0, 4),
    (0, 5),
    (0, 6),
    (1, 3),
    (1, 6),
    (2, 3),
    (2, 6),
    (3, 3),
    (3, 6),
    (3, 7),
    (3, 8),
    (3, 9),
    (4, 9),
    (5, 9),
    (6, 6),
    (6, 7),
    (6, 8),
    (6, 9),
];

/// Error that can occur when undoing the last committed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UndoError {
    /// No commit is pending, or the pending record was already undone.
    #[display("Nothing to undo")]
    NothingToUndo,
}

impl std::error::Error for UndoError {}

/// The committed state of a board: dots, lines, one-level undo record.
///
/// Mutation happens only through [`BoardState::undo`], [`BoardState::reset`]
/// and the crate-private commit invoked by the drag validator, keeping every
/// operation atomic with respect to failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    dots: HashSet<Dot>,
    lines: HashSet<Line>,
    last_dot: Option<Dot>,
    last_line: Option<Line>,
}

impl BoardState {
    /// Creates a fresh board holding only the fixed starting pattern.
    #[instrument]
    pub fn new() -> Self {
        let mut dots = HashSet::new();
        for (a, b) in INITIAL_PATTERN {
            dots.insert(Dot::initial(a, b));
            if a != b {
                dots.insert(Dot::initial(b, a));
            }
        }
        Self {
            dots,
            lines: HashSet::new(),
            last_dot: None,
            last_line: None,
        }
    }

    /// Rebuilds a board from externally persisted dot and line sets.
    ///
    /// The restored board has no pending undo. Callers restoring untrusted
    /// snapshots should verify it with the board invariants afterwards.
    pub fn from_parts(dots: HashSet<Dot>, lines: HashSet<Line>) -> Self {
        Self {
            dots,
            lines,
            last_dot: None,
            last_line: None,
        }
    }

    /// The committed dots.
    pub fn dots(&self) -> &HashSet<Dot> {
        &self.dots
    }

    /// The committed lines.
    pub fn lines(&self) -> &HashSet<Line> {
        &self.lines
    }

    /// Whether a dot exists at the given lattice position.
    pub fn contains_dot(&self, x: i32, y: i32) -> bool {
        self.dots.contains(&Dot::new(x, y))
    }

    /// Current score: the number of committed lines.
    pub fn score(&self) -> usize {
        self.lines.len()
    }

    /// Adds a validated line and its single new dot, recording both for undo.
    ///
    /// Only the drag validator calls this; the line has already passed every
    /// rule check.
    #[instrument(skip(self), fields(line = %line, score = self.lines.len() + 1))]
    pub(crate) fn commit(&mut self, line: Line, new_dot: Dot) {
        self.dots.insert(new_dot);
        self.last_dot = Some(new_dot);
        self.last_line = Some(line.clone());
        self.lines.insert(line);
        info!("Committed line");
    }

    /// Removes the last committed line and its dot, if one is pending.
    ///
    /// Only a single undo is ever available: committing again overwrites the
    /// record, and undoing clears it.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::NothingToUndo`] when no commit is pending; the
    /// board is left unchanged.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        match (&self.last_dot, &self.last_line) {
            (Some(dot), Some(line)) if !dot.is_initial => {
                let dot = *dot;
                let line = line.clone();
                self.dots.remove(&dot);
                self.lines.remove(&line);
                self.last_dot = None;
                self.last_line = None;
                info!(line = %line, "Undid last line");
                Ok(())
            }
            _ => {
                warn!("Undo requested with nothing to undo");
                Err(UndoError::NothingToUndo)
            }
        }
    }

    /// Discards all player state, restoring the fixed starting pattern.
    ///
    /// Carrying the high score forward is the caller's concern.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(final_score = self.score(), "Resetting board");
        *self = Self::new();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pattern_is_the_36_dot_cross() {
        let board = BoardState::new();
        assert_eq!(board.dots().len(), 36);
        assert!(board.dots().iter().all(|d| d.is_initial));
        assert_eq!(board.score(), 0);
        // A few spot checks, including a mirrored pair.
        assert!(board.contains_dot(0, 3));
        assert!(board.contains_dot(3, 0));
        assert!(board.contains_dot(9, 5));
        assert!(!board.contains_dot(0, 0));
    }

    #[test]
    fn test_undo_without_commit_is_rejected() {
        let mut board = BoardState::new();
        let before = board.clone();
        assert_eq!(board.undo(), Err(UndoError::NothingToUndo));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_restores_fresh_pattern() {
        let mut board = BoardState::new();
        let line = Line::new(
            0,
            3,
            0,
            7,
            [(0, 3), (0, 4), (0, 5), (0, 6), (0, 7)].map(|(x, y)| Dot::new(x, y)),
        );
        board.commit(line, Dot::new(0, 7));
        assert_eq!(board.score(), 1);

        board.reset();
        assert_eq!(board, BoardState::new());
    }
}
