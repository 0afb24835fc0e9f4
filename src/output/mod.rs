//! Visible surfaces for a drawn grid (PNG, terminal text).

mod png_encoder;
mod terminal;

pub use png_encoder::PngEncoder;
pub use terminal::{TerminalEncoder, TerminalMode};
