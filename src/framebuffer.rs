//! RGBA framebuffer used to show a grid on a visible surface.
//!
//! Each grid cell becomes a `cell_size × cell_size` square colored by the
//! [`Palette`](crate::config::Palette) entry for its state.

use crate::color::Rgba;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::grid::Grid;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes each: [R, G, B, A].
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a transparent framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_grid::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(56, 56).unwrap();
    /// assert_eq!(fb.width(), 56);
    /// assert_eq!(fb.pixel_count(), 56 * 56);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSurface { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self { width, height, pixels: vec![0; size] })
    }

    /// Paint a grid, one `cell_size` square per cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_grid(grid: &Grid, config: &RenderConfig) -> Result<Self> {
        crate::time_scope!("framebuffer", "from_grid");
        config.validate()?;
        let side = config.surface_size(grid.width());
        let mut fb = Self::new(side, side)?;

        let width = grid.width() as usize;
        let cell = config.cell_size;
        for (index, state) in grid.cells().iter().enumerate() {
            let col = (index % width) as u32;
            let row = (index / width) as u32;
            fb.fill_rect(col * cell, row * cell, cell, cell, config.palette.color(*state));
        }

        crate::debug!("framebuffer", "painted {}x{} cells at {cell}px", width, width);
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = self.pixel_index(x1, row_y);
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
