//! The board geometry engine: data model, state, drag validation and
//! move suggestion.

mod rules;
mod state;
mod suggest;
mod types;

pub mod invariants;

pub use rules::{DragError, DragOutcome, classify, commit_drag};
pub use state::{BoardState, UndoError};
pub use suggest::suggest_lines;
pub use types::{Dot, Drag, Line, Orientation};
