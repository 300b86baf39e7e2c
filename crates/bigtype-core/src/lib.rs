//! # bigtype Core
//!
//! Banner rendering engine for bigtype.
//!
//! This crate provides:
//! - A fixed 5x7 bitmap font (letters, digits, space, a little punctuation)
//! - Case-insensitive glyph lookup with a placeholder for unknown characters
//! - Scaled banner rendering with a configurable draw symbol and spacing
//!
//! ```text
//! #   #  ###
//! #   #   #
//! #   #   #
//! #####   #
//! #   #   #
//! #   #   #
//! #   #  ###
//! ```

pub mod error;
pub mod font;
pub mod render;

pub use error::{CoreError, Result};
pub use font::{
    fold, glyph_for, is_supported, lookup, supported_chars, Glyph, FONT_5X7, GLYPH_HEIGHT,
    GLYPH_WIDTH, PLACEHOLDER,
};
pub use render::{render, BannerRenderer, RenderConfig};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core engine (builds the glyph table)
pub fn init() -> Result<()> {
    let glyphs = once_cell::sync::Lazy::force(&FONT_5X7).len();
    tracing::debug!("Initializing bigtype core v{} ({} glyphs)", VERSION, glyphs);
    Ok(())
}
