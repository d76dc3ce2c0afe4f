//! Drag validation - turning a freeform drag into a committed 5-dot line.
//!
//! Every check here is side-effect-free; the board mutates only in the
//! final commit step, so any rejection leaves it untouched.

use super::state::BoardState;
use super::types::{Dot, Drag, Line, Orientation};
use crate::grid::Lattice;
use tracing::{debug, instrument};

/// Error that can occur when validating a classified drag.
///
/// Display strings are the user-facing rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DragError {
    /// The snapped span is shorter than three lattice intervals.
    #[display("The line is too short")]
    TooShort,
    /// Fewer than four of the five candidate slots hold an existing dot.
    #[display("Not enough dots for a new line.")]
    NotEnoughDots,
    /// The candidate slots hold no gap for a new dot.
    #[display("One new dot must be part of a new line")]
    NotExactlyOneNewDot,
    /// An already committed line shares two or more of the candidate dots.
    #[display("Overlapping lines")]
    OverlappingLines,
}

impl std::error::Error for DragError {}

/// Outcome of a drag that did not break any rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The drag was normalized, validated and committed.
    Committed(Line),
    /// The drag was a tap or jitter too small to classify. Not an error
    /// and never surfaced to the player.
    Ignored,
}

/// Classifies a raw drag by its dominant axis.
///
/// Returns `None` when both deltas fall under two lattice intervals - the
/// gesture is a tap or jitter and is ignored entirely.
pub fn classify(drag: &Drag, lattice: &Lattice) -> Option<Orientation> {
    let threshold = 2.0 * lattice.interval;
    let dx = drag.dx();
    let dy = drag.dy();

    if dx.abs() < threshold && dy.abs() < threshold {
        None
    } else if dx.abs() < threshold {
        Some(Orientation::Vertical)
    } else if dy.abs() < threshold {
        Some(Orientation::Horizontal)
    } else if (dx < 0.0) == (dy < 0.0) {
        Some(Orientation::DiagonalDown)
    } else {
        Some(Orientation::DiagonalUp)
    }
}

/// Validates a raw drag against the board and commits it if legal.
///
/// The gesture is classified, snapped to the lattice, forced to exactly
/// four intervals in the drag direction, and checked against the game
/// rules: four of the five covered slots must already hold dots, exactly
/// one must be free, and no committed line may share two of the five.
///
/// # Errors
///
/// Any [`DragError`]; the board is unchanged whenever one is returned.
#[instrument(skip(board), fields(score = board.score()))]
pub fn commit_drag(
    board: &mut BoardState,
    drag: &Drag,
    lattice: &Lattice,
) -> Result<DragOutcome, DragError> {
    let Some(orientation) = classify(drag, lattice) else {
        debug!("Drag too small to classify, ignoring");
        return Ok(DragOutcome::Ignored);
    };

    let x1 = lattice.snap_index(drag.x1);
    let y1 = lattice.snap_index(drag.y1);
    let x2 = lattice.snap_index(drag.x2);
    let y2 = lattice.snap_index(drag.y2);

    // The span is measured on snapped endpoints: a drag long enough to
    // classify can still snap short. Diagonals must pass on both axes.
    let (step_x, step_y) = match orientation {
        Orientation::Vertical => {
            if (y1 - y2).abs() < 3 {
                return Err(DragError::TooShort);
            }
            (0, sign(drag.dy()))
        }
        Orientation::Horizontal => {
            if (x1 - x2).abs() < 3 {
                return Err(DragError::TooShort);
            }
            (sign(drag.dx()), 0)
        }
        Orientation::DiagonalDown | Orientation::DiagonalUp => {
            if (x1 - x2).abs() < 3 || (y1 - y2).abs() < 3 {
                return Err(DragError::TooShort);
            }
            (sign(drag.dx()), sign(drag.dy()))
        }
    };

    // Force the line to exactly four intervals from the snapped start,
    // keeping the drag direction.
    let slots: [(i32, i32); 5] =
        std::array::from_fn(|i| (x1 + step_x * i as i32, y1 + step_y * i as i32));

    let misses: Vec<(i32, i32)> = slots
        .iter()
        .copied()
        .filter(|&(x, y)| !board.contains_dot(x, y))
        .collect();

    if slots.len() - misses.len() < 4 {
        debug!(misses = misses.len(), "Too few existing dots under the line");
        return Err(DragError::NotEnoughDots);
    }
    if misses.len() != 1 {
        return Err(DragError::NotExactlyOneNewDot);
    }

    // Snapshot the five dots, keeping the board's initial flags for hits.
    let dots = slots.map(|(x, y)| {
        board
            .dots()
            .get(&Dot::new(x, y))
            .copied()
            .unwrap_or(Dot::new(x, y))
    });

    if board
        .lines()
        .iter()
        .any(|line| line.dots().iter().filter(|d| dots.contains(*d)).count() >= 2)
    {
        return Err(DragError::OverlappingLines);
    }

    let (new_x, new_y) = misses[0];
    let line = Line::new(x1, y1, x1 + 4 * step_x, y1 + 4 * step_y, dots);
    board.commit(line.clone(), Dot::new(new_x, new_y));
    Ok(DragOutcome::Committed(line))
}

fn sign(v: f32) -> i32 {
    if v < 0.0 { -1 } else { 1 }
}
