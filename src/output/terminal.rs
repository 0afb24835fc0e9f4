//! Terminal output encoder.
//!
//! Renders a grid as text, one character per cell, top row first:
//! - ASCII: `#` drawn, `.` odd background, space even background
//! - Block: `█` drawn, `░` odd background, space even background

use crate::geometry::Coordinate;
use crate::grid::{Grid, PixelState};

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Plain ASCII (widest compatibility)
    #[default]
    Ascii,
    /// Unicode block characters
    Block,
}

impl TerminalMode {
    const fn glyph(self, state: PixelState) -> char {
        match (self, state) {
            (Self::Ascii, PixelState::Drawn) => '#',
            (Self::Ascii, PixelState::BackgroundOdd) => '.',
            (Self::Block, PixelState::Drawn) => '█',
            (Self::Block, PixelState::BackgroundOdd) => '░',
            (_, PixelState::BackgroundEven) => ' ',
        }
    }
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    hide_background: bool,
    axes: bool,
}

impl TerminalEncoder {
    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Render every background cell as a space, hiding the checkerboard.
    #[must_use]
    pub fn hide_background(mut self, hide: bool) -> Self {
        self.hide_background = hide;
        self
    }

    /// Mark the x and y axes (`-`, `|`, `+`) on undrawn cells.
    #[must_use]
    pub fn axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Render a grid to a string, one line per row, each ending in `\n`.
    #[must_use]
    pub fn render(&self, grid: &Grid) -> String {
        let width = grid.width() as usize;
        let mut output = String::with_capacity((width * 3 + 1) * width);

        for (index, state) in grid.cells().iter().enumerate() {
            output.push(self.glyph(grid.mapper().to_coordinate(index), *state));
            if (index + 1) % width == 0 {
                output.push('\n');
            }
        }

        output
    }

    fn glyph(&self, c: Coordinate, state: PixelState) -> char {
        if state.is_drawn() {
            return self.mode.glyph(state);
        }
        if self.axes {
            match (c.x, c.y) {
                (0, 0) => return '+',
                (0, _) => return '|',
                (_, 0) => return '-',
                _ => {}
            }
        }
        if self.hide_background {
            ' '
        } else {
            self.mode.glyph(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelSink;

    #[test]
    fn test_ascii_checkerboard() {
        let grid = Grid::new(1).unwrap();
        let text = TerminalEncoder::new().render(&grid);
        assert_eq!(text, " . \n. .\n . \n");
    }

    #[test]
    fn test_ascii_drawn_cells() {
        let mut grid = Grid::new(1).unwrap();
        grid.set_pixel(-1, 1);
        grid.set_pixel(1, -1);
        let text = TerminalEncoder::new().hide_background(true).render(&grid);
        assert_eq!(text, "#  \n   \n  #\n");
    }

    #[test]
    fn test_block_mode() {
        let mut grid = Grid::new(1).unwrap();
        grid.set_pixel(0, 0);
        let text = TerminalEncoder::new().mode(TerminalMode::Block).render(&grid);
        assert_eq!(text, " ░ \n░█░\n ░ \n");
    }

    #[test]
    fn test_axes() {
        let mut grid = Grid::new(2).unwrap();
        grid.set_pixel(0, 0);
        let text = TerminalEncoder::new().hide_background(true).axes(true).render(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  |  ");
        assert_eq!(lines[2], "--#--");
        assert_eq!(lines.len(), 5);
    }
}
