//! Cartesian coordinate to buffer index mapping.
//!
//! The grid is `width = 2 * half_size + 1` cells on each side, stored
//! row-major with row 0 at the top. Cartesian `y` grows upward, so the row
//! order is inverted relative to `y`:
//!
//! ```text
//! index = (half_size - y) * width + half_size + x
//! x     = -half_size + index % width
//! y     =  half_size - index / width
//! ```

use crate::geometry::Coordinate;

/// Pure conversion between Cartesian coordinates and linear buffer indices.
///
/// Performs no bounds checking in [`to_index`](Self::to_index); use
/// [`contains`](Self::contains) before indexing a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    half_size: i32,
}

impl CoordinateMapper {
    /// Mapper for a validated half size: `0 <= half_size` and `2 * half_size + 1`
    /// fits in `i32`. Only [`Grid::new`](crate::grid::Grid::new) builds one;
    /// obtain it through [`Grid::mapper`](crate::grid::Grid::mapper).
    #[must_use]
    pub(crate) const fn new(half_size: i32) -> Self {
        Self { half_size }
    }

    /// Half size shared by both axes.
    #[must_use]
    pub const fn half_size(&self) -> i32 {
        self.half_size
    }

    /// Side length in cells, `2 * half_size + 1`.
    #[must_use]
    pub const fn width(&self) -> i32 {
        2 * self.half_size + 1
    }

    /// Total number of cells, `width²`.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        let w = self.width() as usize;
        w * w
    }

    /// Whether `|x| <= half_size` and `|y| <= half_size`.
    #[must_use]
    pub const fn contains(&self, c: Coordinate) -> bool {
        let half = self.half_size as u32;
        c.x.unsigned_abs() <= half && c.y.unsigned_abs() <= half
    }

    /// Linear index of a coordinate. Total over integers; the result may lie
    /// outside the buffer for out-of-range coordinates.
    #[must_use]
    pub const fn to_index(&self, c: Coordinate) -> i64 {
        let half = self.half_size as i64;
        (half - c.y as i64) * self.width() as i64 + half + c.x as i64
    }

    /// Coordinate of a linear index.
    #[must_use]
    pub const fn to_coordinate(&self, index: usize) -> Coordinate {
        let width = self.width() as usize;
        Coordinate::new(
            -self.half_size + (index % width) as i32,
            self.half_size - (index / width) as i32,
        )
    }
}
