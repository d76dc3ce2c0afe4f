//! Ledger: dots and lines account for each other.

use super::Invariant;
use crate::board::state::BoardState;

/// Every line dot exists on the board, every player dot is covered by at
/// least one line, and player dots and lines are in one-to-one
/// correspondence (each commit introduced exactly one new dot).
#[derive(Debug, Clone, Copy)]
pub struct DotLedgerInvariant;

impl Invariant<BoardState> for DotLedgerInvariant {
    fn holds(board: &BoardState) -> bool {
        let line_dots_present = board
            .lines()
            .iter()
            .all(|line| line.dots().iter().all(|d| board.contains_dot(d.x, d.y)));

        let player_dots = board.dots().iter().filter(|d| !d.is_initial);
        let player_dots_covered = player_dots.clone().all(|dot| {
            board
                .lines()
                .iter()
                .any(|line| line.dots().contains(dot))
        });

        line_dots_present
            && player_dots_covered
            && player_dots.count() == board.lines().len()
    }

    fn description() -> &'static str {
        "Every player dot was introduced by exactly one line commit"
    }
}
