//! Grid coordinates and distance helpers.
//!
//! The world is a fixed 5×5 grid.  `x` is the row (0 = top) and `y` the
//! column (0 = left), so `UP` decreases `x` and `LEFT` decreases `y`.

use std::fmt;

use crate::{PlaceId, TaxiError, TaxiResult};

/// Side length of the square grid.
pub const GRID_SIZE: u8 = 5;

/// A validated position on the grid.  Both components lie in `0..GRID_SIZE`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    x: u8,
    y: u8,
}

impl Coords {
    /// Validate and build a coordinate pair.
    ///
    /// # Errors
    /// [`TaxiError::OutOfBounds`] if either component is outside `[0, 4]`.
    pub fn new(x: i32, y: i32) -> TaxiResult<Self> {
        let size = GRID_SIZE as i32;
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return Err(TaxiError::OutOfBounds { x, y });
        }
        Ok(Self { x: x as u8, y: y as u8 })
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.x as i32
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.y as i32
    }

    /// The coordinate shifted by `(dx, dy)`, or `None` if that leaves the grid.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Coords> {
        Coords::new(self.x() + dx, self.y() + dy).ok()
    }

    /// Row-major place index.
    #[inline]
    pub fn place_id(self) -> PlaceId {
        PlaceId(self.x * GRID_SIZE + self.y)
    }

    /// Inverse of [`place_id`](Self::place_id).
    ///
    /// # Errors
    /// [`TaxiError::OutOfBounds`] if `id` does not address a grid cell.
    pub fn from_place_id(id: PlaceId) -> TaxiResult<Coords> {
        let size = GRID_SIZE as i32;
        let raw = id.0 as i32;
        Coords::new(raw / size, raw % size)
    }

    /// Squared Euclidean distance.  Orders goals identically to the true
    /// Euclidean distance without leaving integer arithmetic.
    #[inline]
    pub fn distance_sq(self, other: Coords) -> i32 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    /// Euclidean distance, for log output.
    pub fn distance(self, other: Coords) -> f64 {
        (self.distance_sq(other) as f64).sqrt()
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: Coords) -> i32 {
        (self.x() - other.x()).abs().max((self.y() - other.y()).abs())
    }

    /// Manhattan distance.
    #[inline]
    pub fn manhattan(self, other: Coords) -> i32 {
        (self.x() - other.x()).abs() + (self.y() - other.y()).abs()
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}
