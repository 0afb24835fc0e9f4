//! Error types for raster-grid operations.
//!
//! Out-of-range pixel writes are not errors: the grid clips them silently.
//! Everything here is a rejected request, reported before any pixel is written.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in raster-grid operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Grid half size that cannot describe a buffer.
    #[error("Invalid grid dimensions: half size {half_size}")]
    InvalidDimensions {
        /// Requested half size.
        half_size: i32,
    },

    /// Framebuffer with a zero dimension.
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidSurface {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Step algorithm asked to draw a vertical line (infinite slope).
    #[error("Step algorithm cannot draw a vertical line at x = {x}")]
    VerticalStepLine {
        /// Shared x coordinate of both endpoints.
        x: i32,
    },

    /// Step algorithm endpoints given right-to-left.
    #[error("Step algorithm requires x0 <= x1, got x0 = {x0}, x1 = {x1}")]
    DescendingStepLine {
        /// Start x coordinate.
        x0: i32,
        /// End x coordinate.
        x1: i32,
    },

    /// DDA segment whose endpoints coincide (zero steps).
    #[error("Zero-length segment at ({x}, {y})")]
    ZeroLengthSegment {
        /// X coordinate of the degenerate segment.
        x: i32,
        /// Y coordinate of the degenerate segment.
        y: i32,
    },

    /// Primitive whose extent along an axis does not fit in `i32`.
    #[error("Primitive extent {extent} exceeds {}", i32::MAX)]
    ExtentTooLarge {
        /// Requested extent in cells.
        extent: i64,
    },

    /// Circle radius that is zero or negative.
    #[error("Radius must be positive, got {0}")]
    NonPositiveRadius(i32),

    /// Radius text that is not an integer.
    #[error("Radius must be a positive integer, got {0:?}")]
    InvalidRadius(String),

    /// Line algorithm name that is not recognized.
    #[error("Unknown line algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
