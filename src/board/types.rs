//! Core domain types for the Join Five board.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A dot on the board, identified by its lattice position.
///
/// Coordinates are integer lattice indices, never pixels; this keeps dot
/// identity exact under set membership and serialization round-trips.
/// Equality and hashing consider only `(x, y)` - two dots at the same
/// lattice position are the same dot regardless of how they got there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dot {
    /// Lattice column.
    pub x: i32,
    /// Lattice row.
    pub y: i32,
    /// Whether this dot belongs to the fixed starting pattern.
    pub is_initial: bool,
}

impl Dot {
    /// Creates a player-placed dot at the given lattice position.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_initial: false,
        }
    }

    /// Creates a dot belonging to the fixed starting pattern.
    pub fn initial(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_initial: true,
        }
    }
}

impl PartialEq for Dot {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Dot {}

impl Hash for Dot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl std::fmt::Display for Dot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a committed or candidate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Orientation {
    /// Constant `x`, spanning rows.
    Vertical,
    /// Constant `y`, spanning columns.
    Horizontal,
    /// Both coordinates increase together.
    DiagonalDown,
    /// `x` increases while `y` decreases.
    DiagonalUp,
}

impl Orientation {
    /// The coordinate a dot keeps constant along this orientation.
    ///
    /// Dots sharing a group key are collinear along the orientation, so the
    /// suggestion scan groups by it: `x` for vertical, `y` for horizontal,
    /// `x - y` for diagonal-down, `x + y` for diagonal-up.
    pub fn group_key(&self, dot: &Dot) -> i32 {
        match self {
            Orientation::Vertical => dot.x,
            Orientation::Horizontal => dot.y,
            Orientation::DiagonalDown => dot.x - dot.y,
            Orientation::DiagonalUp => dot.x + dot.y,
        }
    }

    /// The coordinate that varies along this orientation.
    pub fn axis_position(&self, dot: &Dot) -> i32 {
        match self {
            Orientation::Vertical => dot.y,
            Orientation::Horizontal => dot.x,
            Orientation::DiagonalDown | Orientation::DiagonalUp => dot.x,
        }
    }

    /// Reconstructs the lattice position on this orientation's line `key`
    /// at varying coordinate `t`. Inverse of [`Orientation::group_key`] /
    /// [`Orientation::axis_position`].
    pub fn slot(&self, key: i32, t: i32) -> (i32, i32) {
        match self {
            Orientation::Vertical => (key, t),
            Orientation::Horizontal => (t, key),
            Orientation::DiagonalDown => (t, t - key),
            Orientation::DiagonalUp => (t, key - t),
        }
    }
}

/// A committed or candidate 5-dot line.
///
/// Endpoints are lattice indices spanning exactly four intervals along the
/// line's orientation. Identity is the ordered endpoint pair only; the dot
/// snapshot is carried data. `dots` is ordered from endpoint 1 to
/// endpoint 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    dots: [Dot; 5],
}

impl Line {
    /// Creates a line from its endpoints and ordered dot snapshot.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32, dots: [Dot; 5]) -> Self {
        Self { x1, y1, x2, y2, dots }
    }

    /// First endpoint column.
    pub fn x1(&self) -> i32 {
        self.x1
    }

    /// First endpoint row.
    pub fn y1(&self) -> i32 {
        self.y1
    }

    /// Second endpoint column.
    pub fn x2(&self) -> i32 {
        self.x2
    }

    /// Second endpoint row.
    pub fn y2(&self) -> i32 {
        self.y2
    }

    /// The five dots of this line, from endpoint 1 to endpoint 2.
    pub fn dots(&self) -> &[Dot; 5] {
        &self.dots
    }

    /// Orientation derived from the endpoints.
    pub fn orientation(&self) -> Orientation {
        if self.x1 == self.x2 {
            Orientation::Vertical
        } else if self.y1 == self.y2 {
            Orientation::Horizontal
        } else if (self.x2 - self.x1).signum() == (self.y2 - self.y1).signum() {
            Orientation::DiagonalDown
        } else {
            Orientation::DiagonalUp
        }
    }

    /// Unit lattice step from endpoint 1 towards endpoint 2.
    pub fn step(&self) -> (i32, i32) {
        ((self.x2 - self.x1).signum(), (self.y2 - self.y1).signum())
    }

    /// The three dots strictly between the endpoints.
    pub fn interior_dots(&self) -> &[Dot] {
        &self.dots[1..4]
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.x1 == other.x1 && self.y1 == other.y1 && self.x2 == other.x2 && self.y2 == other.y2
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x1.hash(state);
        self.y1.hash(state);
        self.x2.hash(state);
        self.y2.hash(state);
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// A raw drag gesture in continuous coordinates, as delivered by the
/// gesture layer: the press point and the release point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// Press x.
    pub x1: f32,
    /// Press y.
    pub y1: f32,
    /// Release x.
    pub x2: f32,
    /// Release y.
    pub y2: f32,
}

impl Drag {
    /// Creates a drag from press and release coordinates.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Horizontal delta, release minus press.
    pub fn dx(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Vertical delta, release minus press.
    pub fn dy(&self) -> f32 {
        self.y2 - self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_identity_ignores_initial_flag() {
        assert_eq!(Dot::new(2, 3), Dot::initial(2, 3));
        assert_ne!(Dot::new(2, 3), Dot::new(3, 2));
    }

    #[test]
    fn test_orientation_from_endpoints() {
        let dots = |p: [(i32, i32); 5]| p.map(|(x, y)| Dot::new(x, y));
        let vertical = Line::new(1, 0, 1, 4, dots([(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)]));
        assert_eq!(vertical.orientation(), Orientation::Vertical);

        let down = Line::new(0, 0, 4, 4, dots([(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]));
        assert_eq!(down.orientation(), Orientation::DiagonalDown);

        // Drawn right-to-left, still diagonal-down: deltas share sign.
        let down_rev = Line::new(4, 4, 0, 0, dots([(4, 4), (3, 3), (2, 2), (1, 1), (0, 0)]));
        assert_eq!(down_rev.orientation(), Orientation::DiagonalDown);

        let up = Line::new(0, 4, 4, 0, dots([(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)]));
        assert_eq!(up.orientation(), Orientation::DiagonalUp);
    }

    #[test]
    fn test_line_identity_is_endpoints_only() {
        let a = Line::new(0, 0, 0, 4, [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)].map(|(x, y)| Dot::new(x, y)));
        let b = Line::new(0, 0, 0, 4, [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)].map(|(x, y)| Dot::initial(x, y)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_slot_inverts_grouping() {
        let dot = Dot::new(5, 2);
        for orientation in [
            Orientation::Vertical,
            Orientation::Horizontal,
            Orientation::DiagonalDown,
            Orientation::DiagonalUp,
        ] {
            let key = orientation.group_key(&dot);
            let t = orientation.axis_position(&dot);
            assert_eq!(orientation.slot(key, t), (dot.x, dot.y));
        }
    }
}
