//! Planar coordinate type.
//!
//! Cities sit on a flat 2-D plane with non-negative coordinates; distances are
//! plain Euclidean.  `f64` keeps exact equality meaningful for the duplicate
//! location check and lets `sqrt(2)` compare bit-for-bit in tests.

/// A point on the city plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance, `sqrt((x0-x1)^2 + (y0-y1)^2)`.  Symmetric.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// `true` when both coordinates are finite and non-negative.
    #[inline]
    pub fn is_on_plane(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x >= 0.0 && self.y >= 0.0
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
