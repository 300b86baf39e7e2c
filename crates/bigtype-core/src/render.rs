//! # Banner Renderer
//!
//! Turns a string into a block of ASCII art using the 5x7 font. Every lit
//! pixel becomes a `scale` x `scale` block of the draw symbol, and `spacing`
//! blank columns follow each glyph.
//!
//! Each output row keeps the separator after the last glyph until the final
//! right trim, so output matches the classic tool byte for byte.

use crate::error::{CoreError, Result};
use crate::font::{glyph_for, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Scale of the default (`large`) size
pub const DEFAULT_SCALE: i64 = 4;

/// Render `text` as a banner.
///
/// Fails with [`CoreError::InvalidArgument`] when `scale < 1`, or when the
/// banner would not fit in memory. Characters without a glyph render as the
/// placeholder dot and never fail.
pub fn render(text: &str, draw: &str, scale: i64, spacing: usize) -> Result<String> {
    if scale < 1 {
        return Err(CoreError::invalid_argument("scale must be >= 1"));
    }
    let too_large = || CoreError::invalid_argument(format!("scale {} is too large", scale));
    let scale = usize::try_from(scale).map_err(|_| too_large())?;

    // Blank cells are one byte per column, filled cells draw.len()
    let height = GLYPH_HEIGHT.checked_mul(scale).ok_or_else(too_large)?;
    let cell = draw.len().max(1).checked_mul(scale).ok_or_else(too_large)?;
    let glyph_width = cell
        .checked_mul(GLYPH_WIDTH)
        .and_then(|w| w.checked_add(spacing))
        .ok_or_else(|| CoreError::invalid_argument(format!("spacing {} is too large", spacing)))?;
    let row_width = glyph_width
        .checked_mul(text.chars().count())
        .ok_or_else(too_large)?;
    let total = row_width
        .checked_add(1 + std::mem::size_of::<String>())
        .and_then(|w| w.checked_mul(height))
        .ok_or_else(too_large)?;
    if total > isize::MAX as usize {
        return Err(too_large());
    }

    let mut rows = Vec::new();
    rows.try_reserve_exact(height).map_err(|_| too_large())?;
    for _ in 0..height {
        let mut row = String::new();
        row.try_reserve_exact(row_width).map_err(|_| too_large())?;
        rows.push(row);
    }
    let separator = " ".repeat(spacing);
    let filled = draw.repeat(scale);
    let blank = " ".repeat(scale);

    let mut glyphs = 0usize;
    for ch in text.chars() {
        let glyph = glyph_for(ch);
        glyphs += 1;

        for r in 0..GLYPH_HEIGHT {
            let mut expanded = String::with_capacity(GLYPH_WIDTH * filled.len());
            for c in 0..GLYPH_WIDTH {
                expanded.push_str(if glyph.is_set(r, c) { &filled } else { &blank });
            }

            for row in &mut rows[r * scale..(r + 1) * scale] {
                row.push_str(&expanded);
                row.push_str(&separator);
            }
        }
    }

    tracing::debug!(
        "Rendered {} glyphs at scale {} (spacing {})",
        glyphs,
        scale,
        spacing
    );

    let mut out = rows
        .iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    Ok(out)
}

/// Settings for [`BannerRenderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// String repeated for every lit pixel
    pub draw: String,
    /// Pixel block size (must be >= 1)
    pub scale: i64,
    /// Blank columns after each glyph
    pub spacing: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            draw: "#".to_string(),
            scale: DEFAULT_SCALE,
            spacing: 1,
        }
    }
}

/// Banner renderer bound to a fixed config
#[derive(Debug, Clone, Default)]
pub struct BannerRenderer {
    config: RenderConfig,
}

impl BannerRenderer {
    /// Create a renderer with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render text with this renderer's settings
    pub fn render(&self, text: &str) -> Result<String> {
        render(
            text,
            &self.config.draw,
            self.config.scale,
            self.config.spacing,
        )
    }
}
