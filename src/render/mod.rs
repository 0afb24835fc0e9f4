//! Rasterization algorithms.
//!
//! Three line algorithms and one circle algorithm, all driving a
//! [`PixelSink`]. Line algorithms are selected at runtime through the
//! [`LineAlgorithm`] tag; whole requests can be bundled as a [`Primitive`].
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." *Communications of the ACM*, 20(2), 100-106.

mod circle;
mod line;

use std::fmt;
use std::str::FromStr;

pub use circle::rasterize_circle;
pub use line::{rasterize_bresenham, rasterize_dda, rasterize_step};

use crate::error::{Error, Result};
use crate::geometry::{CircleRequest, LineRequest};
use crate::grid::PixelSink;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Parametric slope-intercept, x-driven, left-to-right only.
    Step,
    /// Digital differential analyzer (floating increments).
    Dda,
    /// Bresenham's integer algorithm, any slope and direction.
    #[default]
    Bresenham,
}

impl LineAlgorithm {
    /// Every algorithm, in the order they are usually presented.
    pub const ALL: [Self; 3] = [Self::Step, Self::Dda, Self::Bresenham];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Dda => "dda",
            Self::Bresenham => "bresenham",
        }
    }

    /// Rasterize `line` with this algorithm.
    ///
    /// # Errors
    ///
    /// Propagates the chosen algorithm's precondition errors; see
    /// [`rasterize_step`], [`rasterize_dda`] and [`rasterize_bresenham`].
    pub fn rasterize<S: PixelSink + ?Sized>(self, sink: &mut S, line: &LineRequest) -> Result<()> {
        let (s, e) = (line.start, line.end);
        match self {
            Self::Step => rasterize_step(sink, s.x, s.y, e.x, e.y),
            Self::Dda => rasterize_dda(sink, s.x, s.y, e.x, e.y),
            Self::Bresenham => rasterize_bresenham(sink, s.x, s.y, e.x, e.y),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step" => Ok(Self::Step),
            "dda" | "cda" => Ok(Self::Dda),
            "bresenham" | "brez" => Ok(Self::Bresenham),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Rasterize a line with the selected algorithm.
///
/// # Errors
///
/// See [`LineAlgorithm::rasterize`].
pub fn rasterize_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    algorithm: LineAlgorithm,
    line: &LineRequest,
) -> Result<()> {
    algorithm.rasterize(sink, line)
}

/// Something that can be rasterized into a pixel sink.
pub trait Drawable {
    /// Emit this primitive's pixels into `sink`.
    ///
    /// # Errors
    ///
    /// Returns the rasterizer's precondition error; nothing is drawn then.
    fn draw(&self, sink: &mut dyn PixelSink) -> Result<()>;
}

impl Drawable for CircleRequest {
    fn draw(&self, sink: &mut dyn PixelSink) -> Result<()> {
        let c = self.center();
        rasterize_circle(sink, c.x, c.y, self.radius())
    }
}

/// A complete drawing request: which shape, with which algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Straight line drawn by a specific algorithm.
    Line {
        /// Algorithm to use.
        algorithm: LineAlgorithm,
        /// Endpoints.
        line: LineRequest,
    },
    /// Circle outline (midpoint algorithm).
    Circle(CircleRequest),
}

impl Primitive {
    /// Line primitive.
    #[must_use]
    pub const fn line(algorithm: LineAlgorithm, line: LineRequest) -> Self {
        Self::Line { algorithm, line }
    }
}

impl Drawable for Primitive {
    fn draw(&self, sink: &mut dyn PixelSink) -> Result<()> {
        match self {
            Self::Line { algorithm, line } => algorithm.rasterize(sink, line),
            Self::Circle(circle) => circle.draw(sink),
        }
    }
}

impl From<CircleRequest> for Primitive {
    fn from(circle: CircleRequest) -> Self {
        Self::Circle(circle)
    }
}
