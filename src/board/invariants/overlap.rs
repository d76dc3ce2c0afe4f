//! Overlap: no two committed lines share more than one dot.

use super::Invariant;
use crate::board::state::BoardState;
use crate::board::types::Line;

/// Any two committed lines share at most one dot.
#[derive(Debug, Clone, Copy)]
pub struct SingleSharedDotInvariant;

impl Invariant<BoardState> for SingleSharedDotInvariant {
    fn holds(board: &BoardState) -> bool {
        let lines: Vec<&Line> = board.lines().iter().collect();
        lines.iter().enumerate().all(|(i, a)| {
            lines[i + 1..].iter().all(|b| {
                a.dots()
                    .iter()
                    .filter(|dot| b.dots().contains(*dot))
                    .count()
                    <= 1
            })
        })
    }

    fn description() -> &'static str {
        "Any two committed lines share at most one dot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::Dot;
    use std::collections::HashSet;

    fn line(p: [(i32, i32); 5]) -> Line {
        let dots = p.map(|(x, y)| Dot::new(x, y));
        Line::new(p[0].0, p[0].1, p[4].0, p[4].1, dots)
    }

    #[test]
    fn test_crossing_lines_sharing_one_dot_hold() {
        let a = line([(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        let b = line([(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        let dots = a.dots().iter().chain(b.dots()).copied().collect();
        let board = BoardState::from_parts(dots, HashSet::from([a, b]));
        assert!(SingleSharedDotInvariant::holds(&board));
    }

    #[test]
    fn test_two_shared_dots_violate() {
        let a = line([(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
        // Shifted one step along the same diagonal: four shared dots.
        let b = line([(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
        let dots = a.dots().iter().chain(b.dots()).copied().collect();
        let board = BoardState::from_parts(dots, HashSet::from([a, b]));
        assert!(!SingleSharedDotInvariant::holds(&board));
    }
}
