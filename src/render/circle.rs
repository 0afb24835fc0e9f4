//! Midpoint (Bresenham) circle rasterizer.

use crate::error::{Error, Result};
use crate::grid::PixelSink;

use super::line::check_extent;

/// Draw a circle outline with the midpoint algorithm.
///
/// Walks one octant from `(0, r)` with decision variable `d = 3 - 2r`,
/// emitting the 8-way symmetric set for every step. Integer arithmetic only,
/// carried in `i64`. Points on the octant boundaries are emitted more than
/// once; pixel writes are idempotent so this is harmless. Reflections that
/// fall outside the `i32` range are skipped: no grid can hold them.
///
/// # Errors
///
/// - [`Error::NonPositiveRadius`] if `r <= 0`.
/// - [`Error::ExtentTooLarge`] if the diameter `2r` does not fit in `i32`.
pub fn rasterize_circle<S: PixelSink + ?Sized>(sink: &mut S, xc: i32, yc: i32, r: i32) -> Result<()> {
    if r <= 0 {
        crate::warn!("circle", "rejected radius {r}");
        return Err(Error::NonPositiveRadius(r));
    }
    let r = i64::from(r);
    check_extent(2 * r)?;

    let center = (i64::from(xc), i64::from(yc));
    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;
    plot_octants(sink, center, x, y);
    let mut sets = 1;

    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        plot_octants(sink, center, x, y);
        sets += 1;
    }

    crate::trace!("circle", "center ({xc}, {yc}), r = {r}: {} pixel writes", sets * 8);
    Ok(())
}

/// Plot the eight reflections of offset `(x, y)` around `(xc, yc)`.
#[inline]
fn plot_octants<S: PixelSink + ?Sized>(sink: &mut S, (xc, yc): (i64, i64), x: i64, y: i64) {
    for (dx, dy) in [(x, y), (-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
        if let (Ok(px), Ok(py)) = (i32::try_from(xc + dx), i32::try_from(yc + dy)) {
            sink.set_pixel(px, py);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coordinate;
    use crate::grid::{Grid, PixelTrace};

    #[test]
    fn test_radius_two_has_twelve_points() {
        let mut trace = PixelTrace::new();
        rasterize_circle(&mut trace, 0, 0, 2).unwrap();

        let mut expected: Vec<Coordinate> = [
            (2, 0), (-2, 0), (0, 2), (0, -2),
            (2, 1), (2, -1), (-2, 1), (-2, -1),
            (1, 2), (1, -2), (-1, 2), (-1, -2),
        ]
        .into_iter()
        .map(Coordinate::from)
        .collect();
        expected.sort_unstable();

        assert_eq!(trace.unique(), expected);
    }

    #[test]
    fn test_radius_one() {
        let mut trace = PixelTrace::new();
        rasterize_circle(&mut trace, 0, 0, 1).unwrap();
        let unique = trace.unique();
        assert!(unique.contains(&Coordinate::new(1, 0)));
        assert!(unique.contains(&Coordinate::new(0, -1)));
        assert!(!unique.contains(&Coordinate::ORIGIN));
    }

    #[test]
    fn test_offset_center() {
        let mut trace = PixelTrace::new();
        rasterize_circle(&mut trace, 5, -3, 4).unwrap();
        let unique = trace.unique();
        for p in [(9, -3), (1, -3), (5, 1), (5, -7)] {
            assert!(unique.contains(&Coordinate::from(p)), "missing {p:?}");
        }
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut trace = PixelTrace::new();
        assert!(matches!(rasterize_circle(&mut trace, 0, 0, 0), Err(Error::NonPositiveRadius(0))));
        assert!(matches!(
            rasterize_circle(&mut trace, 0, 0, -2),
            Err(Error::NonPositiveRadius(-2))
        ));
        assert!(trace.is_empty());
    }

    #[test]
    fn test_circle_clipped_by_grid() {
        let mut grid = Grid::new(3).unwrap();
        rasterize_circle(&mut grid, 3, 3, 2).unwrap();
        // Only the lower-left quarter fits on the grid.
        assert!(grid.is_drawn(Coordinate::new(1, 3)));
        assert!(grid.is_drawn(Coordinate::new(3, 1)));
        assert!(grid.is_drawn(Coordinate::new(2, 1)));
        assert!(grid.is_drawn(Coordinate::new(1, 2)));
        assert!(!grid.is_drawn(Coordinate::new(3, 3)));
        assert_eq!(grid.drawn_count(), 4);
    }

    #[test]
    fn test_rejects_diameter_past_i32() {
        let mut trace = PixelTrace::new();
        let result = rasterize_circle(&mut trace, 0, 0, i32::MAX);
        assert!(matches!(result, Err(Error::ExtentTooLarge { .. })));
        assert!(trace.is_empty());
    }

    #[test]
    fn test_center_at_i32_edge_skips_unrepresentable_points() {
        let mut trace = PixelTrace::new();
        rasterize_circle(&mut trace, i32::MAX, 0, 2).unwrap();
        let unique = trace.unique();
        assert!(unique.contains(&Coordinate::new(i32::MAX - 2, 0)));
        assert!(unique.contains(&Coordinate::new(i32::MAX, 2)));
        assert!(unique.iter().all(|c| c.x >= i32::MAX - 2));
        // The right half lies past i32::MAX.
        assert_eq!(unique.len(), 7);
    }
}
