//! Grid and surface configuration.
//!
//! With the `config` feature, configuration can be loaded from YAML:
//!
//! ```yaml
//! half_size: 20
//! cell_size: 12
//! palette:
//!   drawn: { r: 0, g: 0, b: 0 }
//! ```
//!
//! Missing keys fall back to the defaults.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::grid::{Grid, PixelState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use std::path::Path;

fn default_half_size() -> i32 {
    15
}
fn default_cell_size() -> u32 {
    8
}

/// Colors used to paint each [`PixelState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    /// Background cells at even indices.
    pub even: Rgba,
    /// Background cells at odd indices.
    pub odd: Rgba,
    /// Drawn cells.
    pub drawn: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self { even: Rgba::WHITE, odd: Rgba::LIGHT_GRAY, drawn: Rgba::BLACK }
    }
}

impl Palette {
    /// Color for a cell state.
    #[must_use]
    pub const fn color(&self, state: PixelState) -> Rgba {
        match state {
            PixelState::BackgroundEven => self.even,
            PixelState::BackgroundOdd => self.odd,
            PixelState::Drawn => self.drawn,
        }
    }
}

/// Grid size plus how it is painted onto a framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Grid half size; the grid is `2 * half_size + 1` cells wide.
    #[cfg_attr(feature = "serde", serde(default = "default_half_size"))]
    pub half_size: i32,

    /// Side length of one cell in framebuffer pixels.
    #[cfg_attr(feature = "serde", serde(default = "default_cell_size"))]
    pub cell_size: u32,

    /// Cell colors.
    #[cfg_attr(feature = "serde", serde(default))]
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { half_size: default_half_size(), cell_size: default_cell_size(), palette: Palette::default() }
    }
}

impl RenderConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid half size.
    #[must_use]
    pub fn half_size(mut self, half_size: i32) -> Self {
        self.half_size = half_size;
        self
    }

    /// Set the cell size in pixels.
    #[must_use]
    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] for a negative half size or a zero
    /// cell size.
    pub fn validate(&self) -> Result<()> {
        if self.half_size < 0 {
            return Err(Error::ConfigInvalid {
                key: "half_size".to_string(),
                message: format!("must be >= 0, got {}", self.half_size),
            });
        }
        if self.cell_size == 0 {
            return Err(Error::ConfigInvalid {
                key: "cell_size".to_string(),
                message: "must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// Build an empty grid of the configured size.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the grid cannot
    /// be allocated.
    pub fn build_grid(&self) -> Result<Grid> {
        self.validate()?;
        Grid::new(self.half_size)
    }

    /// Side length in pixels of a framebuffer showing a grid of `width` cells.
    #[must_use]
    pub fn surface_size(&self, width: i32) -> u32 {
        (width.max(0) as u32).saturating_mul(self.cell_size)
    }
}

#[cfg(feature = "config")]
impl RenderConfig {
    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        crate::debug!("config", "parsed {config:?}");
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            crate::warn!("config", "{e}; using defaults");
            Self::default()
        })
    }
}
