//! # raster-grid
//!
//! Classic incremental rasterization on a centered Cartesian pixel grid.
//!
//! A [`Grid`](grid::Grid) is a square buffer of `(2 * half_size + 1)²` cells
//! with the origin at its center cell, `x` to the right and `y` up. Four
//! rasterizers draw into it through the [`PixelSink`](grid::PixelSink)
//! capability:
//!
//! - **Step**: parametric slope-intercept, one pixel per x column
//! - **DDA**: digital differential analyzer with floating increments
//! - **Bresenham**: integer-only line drawing for any slope and direction
//! - **Midpoint circle**: integer-only 8-way symmetric circle outline
//!
//! Writes outside the grid are clipped silently. Malformed requests
//! (vertical Step line, zero-length DDA segment, non-positive radius, an
//! extent past `i32::MAX` cells) are reported as [`Error`] values before
//! anything is drawn.
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_grid::prelude::*;
//!
//! let mut grid = Grid::new(3)?;
//! rasterize_line(&mut grid, LineAlgorithm::Bresenham, &LineRequest::from_coords(-3, -1, 3, 2))?;
//! rasterize_circle(&mut grid, 0, 0, 2)?;
//!
//! assert!(grid.is_drawn(Coordinate::new(3, 2)));
//! print!("{}", TerminalEncoder::new().render(&grid));
//! # Ok::<(), raster_grid::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for colors and render configuration
//! - `config`: YAML configuration loading (implies `serde`)
//! - `full`: All features enabled
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-threaded. A grid assumes
//! exclusive access; embedders that accept concurrent requests must
//! serialize them (e.g. one `Mutex<Grid>`).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Opt-in debug logging.
pub mod debug;

/// Color types.
pub mod color;

/// Cartesian coordinates and drawing requests.
pub mod geometry;

/// Cartesian coordinate to buffer index mapping.
pub mod mapper;

/// Pixel grid and the pixel-sink capability.
pub mod grid;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line and circle rasterizers.
pub mod render;

/// Grid and surface configuration.
pub mod config;

/// RGBA framebuffer for visible surfaces.
pub mod framebuffer;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-grid operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use raster_grid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::{Palette, RenderConfig};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{parse_radius, CircleRequest, Coordinate, LineRequest};
    pub use crate::grid::{Grid, PixelSink, PixelState, PixelTrace};
    pub use crate::mapper::CoordinateMapper;
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::render::{
        rasterize_bresenham, rasterize_circle, rasterize_dda, rasterize_line, rasterize_step,
        Drawable, LineAlgorithm, Primitive,
    };
}
