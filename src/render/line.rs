//! Line rasterizers: parametric step, DDA and Bresenham.
//!
//! All three take two integer endpoints and emit pixel-set calls through a
//! [`PixelSink`]. Requests are validated before the first write, so a
//! rejected request leaves the sink untouched.

use crate::error::{Error, Result};
use crate::grid::PixelSink;

/// Draw a line with the parametric slope-intercept ("step") algorithm.
///
/// Iterates every integer `x` from `x0` to `x1` and plots
/// `y = round(k * x + b)`. The line is x-driven only and is not normalized:
/// steep lines come out sparse, and endpoints must be given left to right.
///
/// The slope is evaluated exactly in integer arithmetic,
/// `y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)`, so there is no drift over
/// long runs. Halves round to even.
///
/// # Errors
///
/// - [`Error::VerticalStepLine`] if `x0 == x1`.
/// - [`Error::DescendingStepLine`] if `x0 > x1`.
/// - [`Error::ExtentTooLarge`] if `x1 - x0` does not fit in `i32`.
pub fn rasterize_step<S: PixelSink + ?Sized>(
    sink: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<()> {
    if x0 == x1 {
        crate::warn!("step", "rejected vertical line at x = {x0}");
        return Err(Error::VerticalStepLine { x: x0 });
    }
    if x0 > x1 {
        crate::warn!("step", "rejected descending line x0 = {x0} > x1 = {x1}");
        return Err(Error::DescendingStepLine { x0, x1 });
    }

    let run = i64::from(x1) - i64::from(x0);
    check_extent(run)?;
    let rise = i64::from(y1) - i64::from(y0);
    let intercept = i64::from(y0) * run;

    for x in x0..=x1 {
        let numerator = intercept + rise * (i64::from(x) - i64::from(x0));
        sink.set_pixel(x, div_round_half_even(numerator, run) as i32);
    }

    crate::trace!("step", "({x0}, {y0}) -> ({x1}, {y1}): {} pixels", run + 1);
    Ok(())
}

/// Draw a line with the digital differential analyzer.
///
/// Takes `steps = max(|dx|, |dy|)` equal floating-point increments from the
/// start point, plotting the rounded position before each step. Plots exactly
/// `steps + 1` points, both endpoints included, in either direction.
///
/// # Errors
///
/// - [`Error::ZeroLengthSegment`] if both endpoints coincide.
/// - [`Error::ExtentTooLarge`] if the step count does not fit in `i32`.
pub fn rasterize_dda<S: PixelSink + ?Sized>(
    sink: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<()> {
    let dx = i64::from(x1) - i64::from(x0);
    let dy = i64::from(y1) - i64::from(y0);
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        crate::warn!("dda", "rejected zero-length segment at ({x0}, {y0})");
        return Err(Error::ZeroLengthSegment { x: x0, y: y0 });
    }
    check_extent(steps)?;

    let inc_x = dx as f32 / steps as f32;
    let inc_y = dy as f32 / steps as f32;

    let mut x = x0 as f32;
    let mut y = y0 as f32;
    for _ in 0..=steps {
        sink.set_pixel(round_half_even(x), round_half_even(y));
        x += inc_x;
        y += inc_y;
    }

    crate::trace!("dda", "({x0}, {y0}) -> ({x1}, {y1}): {} pixels", steps + 1);
    Ok(())
}

/// Draw a line with Bresenham's integer algorithm.
///
/// Handles every slope and direction: steep lines swap the axes so the
/// driving axis is always the longer one, and endpoints are reordered so
/// iteration runs upward along it. Plots exactly `max(|dx|, |dy|) + 1`
/// points and the pixel set does not depend on endpoint order.
///
/// A zero-length segment plots its single point. Deltas and the error term
/// are kept in `i64`; every plotted point lies between the endpoints, so it
/// always fits back in `i32`.
///
/// # Errors
///
/// [`Error::ExtentTooLarge`] if `max(|dx|, |dy|)` does not fit in `i32`.
pub fn rasterize_bresenham<S: PixelSink + ?Sized>(
    sink: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<()> {
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    check_extent(dx)?;
    let dy = (y1 - y0).abs();
    let y_step = if y1 > y0 { 1 } else { -1 };
    let mut error = dx / 2;
    let mut y = y0;

    for x in x0..=x1 {
        if steep {
            sink.set_pixel(y as i32, x as i32);
        } else {
            sink.set_pixel(x as i32, y as i32);
        }
        error -= dy;
        if error < 0 {
            y += y_step;
            error += dx;
        }
    }

    crate::trace!("bresenham", "steep = {steep}, {} pixels", dx + 1);
    Ok(())
}

/// Reject primitives that would need more than `i32::MAX` steps along an axis.
pub(super) fn check_extent(extent: i64) -> Result<()> {
    if extent > i64::from(i32::MAX) {
        crate::warn!("raster", "rejected extent {extent}");
        return Err(Error::ExtentTooLarge { extent });
    }
    Ok(())
}

/// `n / d` rounded to the nearest integer, halves to even. `d` must be positive.
fn div_round_half_even(n: i64, d: i64) -> i64 {
    let q = n.div_euclid(d);
    let twice_rem = 2 * n.rem_euclid(d);
    if twice_rem > d || (twice_rem == d && q % 2 != 0) {
        q + 1
    } else {
        q
    }
}

/// Round to the nearest integer, halves to even.
#[inline]
fn round_half_even(v: f32) -> i32 {
    if (v - v.trunc()).abs() == 0.5 {
        ((v / 2.0).round() * 2.0) as i32
    } else {
        v.round() as i32
    }
}
