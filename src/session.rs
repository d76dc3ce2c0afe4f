//! Game session - the UI-facing surface over the board engine.
//!
//! Owns the state the engine deliberately does not: the lattice the raw
//! gestures arrive in, the "already suggested" memory, the high score and
//! the running game id. The engine itself stays a pure rules module.

use crate::board::{
    BoardState, Drag, DragError, DragOutcome, Line, UndoError, commit_drag, suggest_lines,
};
use crate::grid::Lattice;
use derive_getters::Getters;
use std::collections::HashSet;
use tracing::{info, instrument};

/// Outcome of a suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SuggestOutcome {
    /// A legal line not yet suggested in this cycle.
    #[display("{_0}")]
    Suggested(Line),
    /// The board currently admits no legal line at all.
    #[display("No lines to suggest")]
    NoLines,
    /// Every legal line has been suggested; the cycle restarts.
    #[display("No more lines to suggest")]
    Exhausted,
}

/// A single-player game in progress.
///
/// Gestures, undo, reset and suggestion requests all go through here; the
/// session forwards them to the engine and keeps the bookkeeping the
/// engine treats as caller-side state.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The committed board.
    board: BoardState,
    /// The lattice raw gesture coordinates are measured against.
    lattice: Lattice,
    /// Lines already offered in the current suggestion cycle.
    #[getter(skip)]
    already_suggested: HashSet<Line>,
    /// Best score across resets.
    hi_score: usize,
    /// Identifier of the game being played, bumped on every reset.
    game_id: i32,
}

impl GameSession {
    /// Creates a session on a fresh board with the default lattice.
    pub fn new() -> Self {
        Self::with_lattice(Lattice::default())
    }

    /// Creates a session on a fresh board with the given lattice.
    #[instrument]
    pub fn with_lattice(lattice: Lattice) -> Self {
        Self {
            board: BoardState::new(),
            lattice,
            already_suggested: HashSet::new(),
            hi_score: 0,
            game_id: 1,
        }
    }

    /// Rebuilds a session around a previously captured board.
    pub(crate) fn from_parts(
        board: BoardState,
        lattice: Lattice,
        hi_score: usize,
        game_id: i32,
    ) -> Self {
        Self {
            board,
            lattice,
            already_suggested: HashSet::new(),
            hi_score,
            game_id,
        }
    }

    /// Current score: the number of committed lines.
    pub fn score(&self) -> usize {
        self.board.score()
    }

    /// Processes a finished drag gesture.
    ///
    /// A successful commit invalidates the suggestion memory - the legal
    /// move set has changed, so the next cycle starts fresh.
    ///
    /// # Errors
    ///
    /// Any [`DragError`]; the board is unchanged whenever one is returned.
    #[instrument(skip(self))]
    pub fn drag(&mut self, drag: Drag) -> Result<DragOutcome, DragError> {
        let outcome = commit_drag(&mut self.board, &drag, &self.lattice)?;
        if matches!(outcome, DragOutcome::Committed(_)) {
            self.already_suggested.clear();
        }
        Ok(outcome)
    }

    /// Undoes the last committed line, if one is pending.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::NothingToUndo`] when no commit is pending.
    pub fn undo(&mut self) -> Result<(), UndoError> {
        self.board.undo()
    }

    /// Offers the first legal line not yet suggested in this cycle.
    ///
    /// When the cycle is exhausted the memory resets, so asking again
    /// starts over; [`SuggestOutcome::NoLines`] and
    /// [`SuggestOutcome::Exhausted`] distinguish "no legal moves exist"
    /// from "you have seen them all".
    #[instrument(skip(self))]
    pub fn suggest(&mut self) -> SuggestOutcome {
        let candidates = suggest_lines(&self.board);

        if let Some(line) = candidates
            .iter()
            .find(|candidate| !self.already_suggested.contains(*candidate))
        {
            self.already_suggested.insert(line.clone());
            return SuggestOutcome::Suggested(line.clone());
        }

        self.already_suggested.clear();
        if candidates.is_empty() {
            SuggestOutcome::NoLines
        } else {
            SuggestOutcome::Exhausted
        }
    }

    /// Abandons the current game: folds the score into the high score,
    /// resets the board and starts the next game id.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.hi_score = self.hi_score.max(self.board.score());
        self.board.reset();
        self.already_suggested.clear();
        self.game_id += 1;
        info!(hi_score = self.hi_score, game_id = self.game_id, "Cleared board");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
