//! The pixel grid and the pixel-sink capability the rasterizers draw through.
//!
//! A [`Grid`] owns `(2 * half_size + 1)²` cells in row-major order, row 0 at
//! the top. Cells start in a checkerboard of two background states and move
//! to [`PixelState::Drawn`] when written; only [`Grid::clear`] moves them back.

use crate::error::{Error, Result};
use crate::geometry::Coordinate;
use crate::mapper::CoordinateMapper;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelState {
    /// Background cell at an even buffer index.
    BackgroundEven,
    /// Background cell at an odd buffer index.
    BackgroundOdd,
    /// Cell written by a rasterizer.
    Drawn,
}

impl PixelState {
    /// Background state of the cell at `index`.
    #[must_use]
    pub const fn background(index: usize) -> Self {
        if index % 2 == 0 {
            Self::BackgroundEven
        } else {
            Self::BackgroundOdd
        }
    }

    /// Whether the cell has been drawn.
    #[must_use]
    pub const fn is_drawn(self) -> bool {
        matches!(self, Self::Drawn)
    }
}

/// The capability "set the pixel at (x, y)".
///
/// Every rasterizer in [`crate::render`] emits its output through this trait.
/// Implementations decide what a write means; [`Grid`] clips and stores,
/// [`PixelTrace`] records the raw command stream.
pub trait PixelSink {
    /// Mark the pixel at Cartesian `(x, y)` as drawn.
    ///
    /// Must never fail. Out-of-range writes are silently ignored by sinks
    /// that have bounds.
    fn set_pixel(&mut self, x: i32, y: i32);
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, x: i32, y: i32) {
        (**self).set_pixel(x, y);
    }
}

/// Square pixel grid centered on the Cartesian origin.
///
/// The grid is not thread-safe; embedders that allow concurrent requests
/// must serialize access (e.g. one `Mutex<Grid>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    mapper: CoordinateMapper,
    cells: Vec<PixelState>,
}

impl Grid {
    /// Create a grid with `(2 * half_size + 1)²` background cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `half_size` is negative, the
    /// width overflows `i32`, or the cells cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_grid::grid::Grid;
    ///
    /// let grid = Grid::new(3).unwrap();
    /// assert_eq!(grid.width(), 7);
    /// assert_eq!(grid.cell_count(), 49);
    /// ```
    pub fn new(half_size: i32) -> Result<Self> {
        let width = half_size
            .checked_mul(2)
            .and_then(|w| w.checked_add(1))
            .filter(|_| half_size >= 0)
            .ok_or(Error::InvalidDimensions { half_size })?;
        let count = (width as usize)
            .checked_mul(width as usize)
            .ok_or(Error::InvalidDimensions { half_size })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| Error::InvalidDimensions { half_size })?;
        cells.extend((0..count).map(PixelState::background));
        Ok(Self { mapper: CoordinateMapper::new(half_size), cells })
    }

    /// Coordinate mapper for this grid's dimensions.
    #[must_use]
    pub const fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    /// Half size shared by both axes.
    #[must_use]
    pub const fn half_size(&self) -> i32 {
        self.mapper.half_size()
    }

    /// Side length in cells.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.mapper.width()
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order, row 0 at the top.
    #[must_use]
    pub fn cells(&self) -> &[PixelState] {
        &self.cells
    }

    /// Whether `c` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, c: Coordinate) -> bool {
        self.mapper.contains(c)
    }

    /// State of the cell at `c`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, c: Coordinate) -> Option<PixelState> {
        if !self.contains(c) {
            return None;
        }
        Some(self.cells[self.mapper.to_index(c) as usize])
    }

    /// Whether the cell at `c` is drawn. `false` outside the grid.
    #[must_use]
    pub fn is_drawn(&self, c: Coordinate) -> bool {
        self.get(c).is_some_and(PixelState::is_drawn)
    }

    /// Coordinate of the cell at a linear buffer index, for picking cells
    /// by position in the buffer. `None` past the end of the buffer.
    #[must_use]
    pub fn coordinate_of(&self, index: usize) -> Option<Coordinate> {
        (index < self.cells.len()).then(|| self.mapper.to_coordinate(index))
    }

    /// Coordinates of every drawn cell, in buffer order.
    #[must_use]
    pub fn drawn(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_drawn())
            .map(|(index, _)| self.mapper.to_coordinate(index))
            .collect()
    }

    /// Number of drawn cells.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_drawn()).count()
    }

    /// Restore the checkerboard background in every cell.
    pub fn clear(&mut self) {
        for (index, cell) in self.cells.iter_mut().enumerate() {
            *cell = PixelState::background(index);
        }
        crate::debug!("grid", "cleared {} cells", self.cells.len());
    }
}

impl PixelSink for Grid {
    fn set_pixel(&mut self, x: i32, y: i32) {
        let c = Coordinate::new(x, y);
        if self.contains(c) {
            let index = self.mapper.to_index(c) as usize;
            self.cells[index] = PixelState::Drawn;
        }
    }
}

/// A [`PixelSink`] that records every pixel-set command in order.
///
/// Nothing is clipped: out-of-range and repeated points are kept, which makes
/// the trace the exact effect stream a rasterizer produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelTrace {
    points: Vec<Coordinate>,
}

impl PixelTrace {
    /// Create an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded points in emission order.
    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of recorded commands, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recorded points, sorted and deduplicated.
    #[must_use]
    pub fn unique(&self) -> Vec<Coordinate> {
        let mut points = self.points.clone();
        points.sort_unstable();
        points.dedup();
        points
    }

    /// Replay the recorded commands into another sink.
    pub fn replay<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        for p in &self.points {
            sink.set_pixel(p.x, p.y);
        }
    }

    /// Take the recorded points, leaving the trace empty.
    pub fn take(&mut self) -> Vec<Coordinate> {
        std::mem::take(&mut self.points)
    }
}

impl PixelSink for PixelTrace {
    fn set_pixel(&mut self, x: i32, y: i32) {
        self.points.push(Coordinate::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.half_size(), 3);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.cell_count(), 49);
        assert_eq!(grid.drawn_count(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(Grid::new(-1), Err(Error::InvalidDimensions { half_size: -1 })));
        assert!(Grid::new(i32::MAX).is_err());
    }

    #[test]
    fn test_mapper_comes_from_validated_grid() {
        // Widest half size whose width still fits in i32; far too many cells
        // to allocate, so construction fails instead of aborting.
        let half = (i32::MAX - 1) / 2;
        assert!(matches!(Grid::new(half), Err(Error::InvalidDimensions { .. })));
        assert!(matches!(Grid::new(i32::MIN), Err(Error::InvalidDimensions { .. })));

        let mapper = Grid::new(2).unwrap().mapper();
        assert_eq!(mapper.half_size(), 2);
        assert!(!mapper.contains(Coordinate::new(3, 0)));
        assert!(!mapper.contains(Coordinate::new(i32::MIN, i32::MIN)));
    }

    #[test]
    fn test_zero_half_size() {
        let mut grid = Grid::new(0).unwrap();
        assert_eq!(grid.cell_count(), 1);
        grid.set_pixel(0, 0);
        assert!(grid.is_drawn(Coordinate::ORIGIN));
    }

    #[test]
    fn test_checkerboard_background() {
        let grid = Grid::new(2).unwrap();
        assert_eq!(grid.cells()[0], PixelState::BackgroundEven);
        assert_eq!(grid.cells()[1], PixelState::BackgroundOdd);
        // Odd width: the pattern carries across rows, so vertical
        // neighbours differ as well.
        assert_eq!(grid.cells()[5], PixelState::BackgroundOdd);
        assert_eq!(grid.get(Coordinate::ORIGIN), Some(PixelState::BackgroundEven));
    }

    #[test]
    fn test_set_pixel_marks_cell() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_pixel(-3, 2);
        assert!(grid.is_drawn(Coordinate::new(-3, 2)));
        assert_eq!(grid.cells()[7], PixelState::Drawn);
        assert_eq!(grid.drawn_count(), 1);
    }

    #[test]
    fn test_set_pixel_idempotent() {
        let mut once = Grid::new(3).unwrap();
        once.set_pixel(1, 1);
        let mut twice = Grid::new(3).unwrap();
        twice.set_pixel(1, 1);
        twice.set_pixel(1, 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_out_of_range_write_is_noop() {
        let mut grid = Grid::new(3).unwrap();
        let before = grid.clone();
        grid.set_pixel(4, 0);
        grid.set_pixel(0, -4);
        grid.set_pixel(i32::MIN, i32::MAX);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut grid = Grid::new(3).unwrap();
        let fresh = grid.clone();
        grid.set_pixel(0, 0);
        grid.set_pixel(3, -3);
        grid.clear();
        assert_eq!(grid, fresh);
    }

    #[test]
    fn test_coordinate_of() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.coordinate_of(24), Some(Coordinate::ORIGIN));
        assert_eq!(grid.coordinate_of(0), Some(Coordinate::new(-3, 3)));
        assert_eq!(grid.coordinate_of(49), None);
    }

    #[test]
    fn test_drawn_lists_buffer_order() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_pixel(0, -1);
        grid.set_pixel(0, 1);
        assert_eq!(grid.drawn(), vec![Coordinate::new(0, 1), Coordinate::new(0, -1)]);
    }

    #[test]
    fn test_trace_records_everything() {
        let mut trace = PixelTrace::new();
        trace.set_pixel(9, 9);
        trace.set_pixel(1, 1);
        trace.set_pixel(1, 1);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.unique(), vec![Coordinate::new(1, 1), Coordinate::new(9, 9)]);
    }

    #[test]
    fn test_trace_replay_clips_into_grid() {
        let mut trace = PixelTrace::new();
        trace.set_pixel(0, 0);
        trace.set_pixel(10, 0);

        let mut grid = Grid::new(3).unwrap();
        trace.replay(&mut grid);
        assert_eq!(grid.drawn(), vec![Coordinate::ORIGIN]);
    }
}
