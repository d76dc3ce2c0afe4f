//! Even spacing: every committed line spans exactly four lattice intervals
//! and carries the five dots along them.

use super::Invariant;
use crate::board::state::BoardState;
use crate::board::types::Orientation;

/// Every line's dot set is the five evenly spaced lattice points between
/// its endpoints, which span exactly four intervals along its orientation.
#[derive(Debug, Clone, Copy)]
pub struct EvenSpacingInvariant;

impl Invariant<BoardState> for EvenSpacingInvariant {
    fn holds(board: &BoardState) -> bool {
        board.lines().iter().all(|line| {
            let span_x = (line.x2() - line.x1()).abs();
            let span_y = (line.y2() - line.y1()).abs();
            let spans_ok = match line.orientation() {
                Orientation::Vertical => span_x == 0 && span_y == 4,
                Orientation::Horizontal => span_x == 4 && span_y == 0,
                Orientation::DiagonalDown | Orientation::DiagonalUp => {
                    span_x == 4 && span_y == 4
                }
            };

            let (step_x, step_y) = line.step();
            spans_ok
                && line.dots().iter().enumerate().all(|(i, dot)| {
                    dot.x == line.x1() + step_x * i as i32
                        && dot.y == line.y1() + step_y * i as i32
                })
        })
    }

    fn description() -> &'static str {
        "Every line has exactly five dots evenly spaced by one lattice interval"
    }
}
