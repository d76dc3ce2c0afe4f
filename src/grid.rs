//! Lattice geometry - snapping raw pointer coordinates to grid dots.
//!
//! Everything past this module works in integer lattice indices; continuous
//! (pixel) coordinates exist only at the gesture and rendering boundary.

/// Default spacing between adjacent dot centers, in pixels.
pub const DEFAULT_INTERVAL: f32 = 24.0;

/// Default drawn dot diameter, in pixels. Must be even.
pub const DEFAULT_DOT_WIDTH: f32 = 12.0;

/// The fixed dot lattice: interval between dot centers and dot diameter.
///
/// A lattice point with index `k` has its visual center at
/// `k * interval + dot_width / 2`. [`Lattice::snap`] rounds a raw coordinate
/// to the nearest such center, with the rounding threshold shifted by half
/// the dot radius so snapped lines land on the centers of drawn dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    /// Spacing between adjacent lattice point centers.
    pub interval: f32,
    /// Diameter of a drawn dot.
    pub dot_width: f32,
}

impl Lattice {
    /// Creates a lattice with the given interval and dot diameter.
    pub fn new(interval: f32, dot_width: f32) -> Self {
        Self {
            interval,
            dot_width,
        }
    }

    /// Snaps a raw coordinate to the nearest lattice point center.
    ///
    /// Rounds to whichever of the two bracketing lattice points is closer;
    /// the threshold is offset by half the dot radius so the result aligns
    /// with the drawn dot rather than its top-left corner.
    pub fn snap(&self, v: f32) -> f32 {
        let offset = v % self.interval;
        let snapped = v - offset + self.dot_width / 2.0;
        if offset < (self.interval + self.dot_width / 2.0) / 2.0 {
            snapped
        } else {
            snapped + self.interval
        }
    }

    /// Snaps a raw coordinate to the index of the nearest lattice point.
    pub fn snap_index(&self, v: f32) -> i32 {
        ((self.snap(v) - self.dot_width / 2.0) / self.interval).round() as i32
    }

    /// Pixel center of the lattice point with the given index.
    pub fn center(&self, index: i32) -> f32 {
        index as f32 * self.interval + self.dot_width / 2.0
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL, DEFAULT_DOT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_down_below_threshold() {
        let lattice = Lattice::default();
        // Threshold is (24 + 6) / 2 = 15.
        assert_eq!(lattice.snap(0.0), 6.0);
        assert_eq!(lattice.snap(10.0), 6.0);
        assert_eq!(lattice.snap(14.9), 6.0);
    }

    #[test]
    fn test_snap_rounds_up_at_threshold() {
        let lattice = Lattice::default();
        assert_eq!(lattice.snap(15.0), 30.0);
        assert_eq!(lattice.snap(20.0), 30.0);
        assert_eq!(lattice.snap(24.0), 30.0);
    }

    #[test]
    fn test_snap_index_handles_small_negatives() {
        let lattice = Lattice::default();
        // Slight overshoot past the origin still snaps to index 0.
        assert_eq!(lattice.snap_index(-2.4), 0);
        assert_eq!(lattice.snap_index(0.0), 0);
        assert_eq!(lattice.snap_index(74.4), 3);
    }

    #[test]
    fn test_center_round_trips_through_snap() {
        let lattice = Lattice::default();
        for index in 0..10 {
            assert_eq!(lattice.snap_index(lattice.center(index)), index);
        }
    }
}
