//! Geometric requests consumed by the rasterizers.
//!
//! Coordinates are signed Cartesian: origin at the grid center, `x` grows
//! rightward and `y` grows upward. Construction never checks them against a
//! grid; clipping happens per pixel write.

use crate::error::{Error, Result};

/// A cell position on the Cartesian grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coordinate {
    /// X coordinate (rightward).
    pub x: i32,
    /// Y coordinate (upward).
    pub y: i32,
}

impl Coordinate {
    /// Grid center (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A straight segment between two coordinates, in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRequest {
    /// First endpoint.
    pub start: Coordinate,
    /// Second endpoint.
    pub end: Coordinate,
}

impl LineRequest {
    /// Create a new line request.
    #[must_use]
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Create a line request from raw endpoint coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Coordinate::new(x0, y0), Coordinate::new(x1, y1))
    }

    /// The same segment with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Extent along the driving axis, `max(|dx|, |dy|)`.
    #[must_use]
    pub fn major_extent(&self) -> i32 {
        let dx = (self.end.x - self.start.x).abs();
        let dy = (self.end.y - self.start.y).abs();
        dx.max(dy)
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A circle outline around a center with a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleRequest {
    center: Coordinate,
    radius: i32,
}

impl CircleRequest {
    /// Create a circle request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveRadius`] if `radius <= 0`.
    pub fn new(center: Coordinate, radius: i32) -> Result<Self> {
        if radius <= 0 {
            return Err(Error::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Circle center.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// Circle radius, always `> 0`.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }
}

/// Parse user-entered radius text.
///
/// Accepts the text only when it parses as an integer AND the value is
/// strictly positive. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] for non-integer text and
/// [`Error::NonPositiveRadius`] for values `<= 0`.
pub fn parse_radius(text: &str) -> Result<i32> {
    let radius: i32 = text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidRadius(text.to_string()))?;
    if radius <= 0 {
        return Err(Error::NonPositiveRadius(radius));
    }
    Ok(radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_offset() {
        let c = Coordinate::new(1, -2).offset(3, 4);
        assert_eq!(c, Coordinate::new(4, 2));
    }

    #[test]
    fn test_line_major_extent() {
        assert_eq!(LineRequest::from_coords(0, 0, 4, 2).major_extent(), 4);
        assert_eq!(LineRequest::from_coords(1, 2, 3, 8).major_extent(), 6);
        assert_eq!(LineRequest::from_coords(5, 5, 5, 5).major_extent(), 0);
    }

    #[test]
    fn test_line_reversed() {
        let line = LineRequest::from_coords(1, 2, 3, 4);
        assert_eq!(line.reversed(), LineRequest::from_coords(3, 4, 1, 2));
    }

    #[test]
    fn test_circle_rejects_non_positive_radius() {
        assert!(matches!(
            CircleRequest::new(Coordinate::ORIGIN, 0),
            Err(Error::NonPositiveRadius(0))
        ));
        assert!(matches!(
            CircleRequest::new(Coordinate::ORIGIN, -3),
            Err(Error::NonPositiveRadius(-3))
        ));
        assert_eq!(CircleRequest::new(Coordinate::ORIGIN, 1).unwrap().radius(), 1);
    }

    #[test]
    fn test_parse_radius() {
        assert_eq!(parse_radius("5").unwrap(), 5);
        assert_eq!(parse_radius("  12\n").unwrap(), 12);
    }

    #[test]
    fn test_parse_radius_rejects_garbage_and_non_positive() {
        assert!(matches!(parse_radius("abc"), Err(Error::InvalidRadius(_))));
        assert!(matches!(parse_radius(""), Err(Error::InvalidRadius(_))));
        assert!(matches!(parse_radius("0"), Err(Error::NonPositiveRadius(0))));
        assert!(matches!(parse_radius("-4"), Err(Error::NonPositiveRadius(-4))));
    }
}
