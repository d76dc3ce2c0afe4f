//! Join Five board geometry engine.
//!
//! A single-player puzzle (also known as Morpion solitaire): connect five
//! collinear dots on a fixed lattice by dragging a line. This crate is the
//! rules engine only - it snaps freeform drags to canonical 5-dot grid
//! lines, validates and commits them, and scans the board for legal next
//! moves. Gesture capture, drawing and persistence I/O belong to the host.
//!
//! # Architecture
//!
//! - **Grid**: pure lattice snapping between raw pointer coordinates and
//!   integer lattice indices ([`Lattice`]).
//! - **Board**: the committed dot/line sets with one-level undo
//!   ([`BoardState`]), drag validation ([`commit_drag`]) and move
//!   suggestion ([`suggest_lines`]).
//! - **Session**: the UI-facing surface - suggestion memory, high score,
//!   game ids ([`GameSession`]).
//! - **Settings**: the serde shape the host persists ([`Settings`]).
//!
//! # Example
//!
//! ```
//! use join_five::{Drag, DragOutcome, GameSession};
//!
//! let mut session = GameSession::new();
//!
//! // The starting cross has dots in column 0 at rows 3..=6; dragging one
//! // interval past them completes a five-dot line with one new dot.
//! let interval = session.lattice().interval;
//! let drag = Drag::new(6.0, 3.0 * interval, 6.0, 7.2 * interval);
//!
//! match session.drag(drag) {
//!     Ok(DragOutcome::Committed(_)) => assert_eq!(session.score(), 1),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod grid;
mod session;
mod settings;

// Crate-level exports - board engine
pub use board::{
    BoardState, Dot, Drag, DragError, DragOutcome, Line, Orientation, UndoError, classify,
    commit_drag, suggest_lines,
};

// Crate-level exports - invariants
pub use board::invariants;

// Crate-level exports - lattice geometry
pub use grid::{DEFAULT_DOT_WIDTH, DEFAULT_INTERVAL, Lattice};

// Crate-level exports - session management
pub use session::{GameSession, SuggestOutcome};

// Crate-level exports - persisted state
pub use settings::{HiScoreEntry, Settings, SettingsError};
