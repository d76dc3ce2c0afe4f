//! Suggestion engine - enumerating every currently legal next line.
//!
//! A pure query over [`BoardState`]; nothing here mutates the board, and
//! the "already suggested" memory belongs to the caller.

use super::state::BoardState;
use super::types::{Dot, Line, Orientation};
use std::collections::{BTreeMap, HashSet};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Enumerates every line that could legally be committed right now.
///
/// For each orientation the board dots are grouped by the coordinate the
/// orientation keeps constant, and every five-slot window holding exactly
/// four dots yields a candidate whose free slot is the new dot. Interior
/// dots of same-orientation committed lines are excluded up front; overlap
/// with lines of other orientations is left to the commit-time check, which
/// stays the final authority.
///
/// Candidates are deduplicated by endpoint identity and returned in a
/// deterministic order.
#[instrument(skip(board), fields(dots = board.dots().len(), lines = board.lines().len()))]
pub fn suggest_lines(board: &BoardState) -> Vec<Line> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for orientation in Orientation::iter() {
        scan_orientation(board, orientation, &mut seen, &mut candidates);
    }

    debug!(count = candidates.len(), "Enumerated candidate lines");
    candidates
}

fn scan_orientation(
    board: &BoardState,
    orientation: Orientation,
    seen: &mut HashSet<Line>,
    out: &mut Vec<Line>,
) {
    // An interior dot of a committed line cannot anchor another line of the
    // same orientation without sharing at least two dots with it.
    let interior: HashSet<(i32, i32)> = board
        .lines()
        .iter()
        .filter(|line| line.orientation() == orientation)
        .flat_map(|line| line.interior_dots().iter().map(|d| (d.x, d.y)))
        .collect();

    let mut groups: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for dot in board.dots() {
        if interior.contains(&(dot.x, dot.y)) {
            continue;
        }
        groups
            .entry(orientation.group_key(dot))
            .or_default()
            .push(orientation.axis_position(dot));
    }

    for (key, mut positions) in groups {
        positions.sort_unstable();
        positions.dedup();

        for &v in &positions {
            // Two five-slot windows around each member: one extending
            // backward past it, one starting at it.
            for start in [v - 3, v] {
                let occupied = positions
                    .iter()
                    .filter(|&&t| start <= t && t <= start + 4)
                    .count();
                if occupied != 4 {
                    continue;
                }

                let slots: [(i32, i32); 5] =
                    std::array::from_fn(|i| orientation.slot(key, start + i as i32));
                if slots.iter().any(|slot| interior.contains(slot)) {
                    continue;
                }

                let dots = slots.map(|(x, y)| {
                    board
                        .dots()
                        .get(&Dot::new(x, y))
                        .copied()
                        .unwrap_or(Dot::new(x, y))
                });
                let (x1, y1) = slots[0];
                let (x2, y2) = slots[4];
                let line = Line::new(x1, y1, x2, y2, dots);
                if seen.insert(line.clone()) {
                    out.push(line);
                }
            }
        }
    }
}
