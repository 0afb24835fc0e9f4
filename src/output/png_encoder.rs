//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::grid::Grid;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        crate::time_scope!("png", "write_to_file");
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))?;
        crate::info!("png", "wrote {}x{} to {}", fb.width(), fb.height(), path.display());
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    /// Paint a grid with `config` and encode it to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or encoding fails.
    pub fn grid_to_bytes(grid: &Grid, config: &RenderConfig) -> Result<Vec<u8>> {
        Self::to_bytes(&Framebuffer::from_grid(grid, config)?)
    }

    fn encode<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(fb.pixels())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::grid::PixelSink;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);

        let bytes = PngEncoder::to_bytes(&fb).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_grid_to_bytes() {
        let mut grid = Grid::new(3).unwrap();
        grid.set_pixel(0, 0);
        let bytes = PngEncoder::grid_to_bytes(&grid, &RenderConfig::new().cell_size(3)).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let fb = Framebuffer::from_grid(&Grid::new(2).unwrap(), &RenderConfig::new()).unwrap();

        PngEncoder::write_to_file(&fb, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }
}
