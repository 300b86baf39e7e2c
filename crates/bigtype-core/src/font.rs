//! # 5x7 Bitmap Font
//!
//! A fixed glyph set for banner rendering: `A`-`Z`, `0`-`9`, space and
//! `. , ! ? - ' :`. Lookups fold to uppercase first, so lowercase input
//! renders with the same glyphs.
//!
//! ```text
//!  ###    0b01110
//! #   #   0b10001
//! #   #   0b10001
//! #####   0b11111
//! #   #   0b10001
//! #   #   0b10001
//! #   #   0b10001
//! ```

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Rows per glyph
pub const GLYPH_HEIGHT: usize = 7;

/// Columns per glyph
pub const GLYPH_WIDTH: usize = 5;

/// A 7-row, 5-column bitmap. Bit 4 of each row is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph([u8; GLYPH_HEIGHT]);

impl Glyph {
    /// Build a glyph from raw row bits (only the low 5 bits are used)
    pub const fn new(rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self(rows)
    }

    /// Raw row bits, top to bottom
    pub fn rows(&self) -> &[u8; GLYPH_HEIGHT] {
        &self.0
    }

    /// Whether the cell at `row`, `col` is filled
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < GLYPH_HEIGHT && col < GLYPH_WIDTH);
        self.0[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }

    /// Row as a `0`/`1` string, e.g. `"01110"`
    pub fn row_pattern(&self, row: usize) -> String {
        (0..GLYPH_WIDTH)
            .map(|col| if self.is_set(row, col) { '1' } else { '0' })
            .collect()
    }
}

/// Stand-in for characters the font has no glyph for: a single dot in the
/// middle of row 3.
pub const PLACEHOLDER: Glyph = Glyph([
    0b00000, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000, 0b00000,
]);

const GLYPHS: [(char, Glyph); 44] = [
    ('A', Glyph([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('B', Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110])),
    ('C', Glyph([0b01111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b01111])),
    ('D', Glyph([0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110])),
    ('E', Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111])),
    ('F', Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b00000])),
    ('G', Glyph([0b01111, 0b10000, 0b10000, 0b10011, 0b10001, 0b10001, 0b01110])),
    ('H', Glyph([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('I', Glyph([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('J', Glyph([0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100])),
    ('K', Glyph([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001])),
    ('L', Glyph([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', Glyph([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001])),
    ('N', Glyph([0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001])),
    ('O', Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b00000])),
    ('Q', Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', Glyph([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('S', Glyph([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('T', Glyph([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', Glyph([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', Glyph([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', Glyph([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001])),
    ('X', Glyph([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001])),
    ('Y', Glyph([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('Z', Glyph([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111])),
    ('0', Glyph([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110])),
    ('1', Glyph([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('2', Glyph([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111])),
    ('3', Glyph([0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110])),
    ('4', Glyph([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010])),
    ('5', Glyph([0b11111, 0b10000, 0b10000, 0b11110, 0b00001, 0b10001, 0b01110])),
    ('6', Glyph([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110])),
    ('7', Glyph([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000])),
    ('8', Glyph([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110])),
    ('9', Glyph([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100])),
    (' ', Glyph([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('.', Glyph([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100])),
    (',', Glyph([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01000])),
    ('!', Glyph([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100])),
    ('?', Glyph([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100])),
    ('-', Glyph([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000])),
    ('\'', Glyph([0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000])),
    (':', Glyph([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000])),
];

/// Glyph table keyed by uppercase character, built on first use
pub static FONT_5X7: Lazy<HashMap<char, Glyph>> =
    Lazy::new(|| GLYPHS.iter().copied().collect());

/// Fold a character to its single uppercase form.
///
/// Returns `None` when the uppercase mapping expands to several characters
/// (`'ß'` becomes `"SS"`); no glyph exists for such keys.
pub fn fold(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Look up the glyph for a character, if the font has one
pub fn lookup(ch: char) -> Option<Glyph> {
    fold(ch).and_then(|key| FONT_5X7.get(&key).copied())
}

/// Glyph for a character, falling back to [`PLACEHOLDER`]
pub fn glyph_for(ch: char) -> Glyph {
    lookup(ch).unwrap_or_else(|| {
        tracing::trace!("No glyph for {:?}, using placeholder", ch);
        PLACEHOLDER
    })
}

/// Whether the font renders `ch` with a real glyph
pub fn is_supported(ch: char) -> bool {
    lookup(ch).is_some()
}

/// Every character with a glyph: letters, digits, space, then punctuation
pub fn supported_chars() -> Vec<char> {
    GLYPHS.iter().map(|(ch, _)| *ch).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_unique_keys() {
        assert_eq!(FONT_5X7.len(), GLYPHS.len());
    }

    #[test]
    fn test_glyphs_fit_five_columns() {
        for (ch, glyph) in GLYPHS.iter() {
            assert_eq!(glyph.rows().len(), GLYPH_HEIGHT, "{:?}", ch);
            for row in glyph.rows() {
                assert!(*row < 1 << GLYPH_WIDTH, "{:?} row {:#b} too wide", ch, row);
            }
        }
    }

    #[test]
    fn test_row_pattern() {
        let h = lookup('H').unwrap();
        assert_eq!(h.row_pattern(0), "10001");
        assert_eq!(h.row_pattern(3), "11111");
        let i = lookup('I').unwrap();
        assert_eq!(i.row_pattern(0), "01110");
        assert_eq!(i.row_pattern(3), "00100");
    }

    #[test]
    fn test_is_set_column_order() {
        // J row 0 is 00111
        let j = lookup('J').unwrap();
        assert!(!j.is_set(0, 0));
        assert!(!j.is_set(0, 1));
        assert!(j.is_set(0, 2));
        assert!(j.is_set(0, 4));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        for ch in 'a'..='z' {
            assert_eq!(lookup(ch), lookup(ch.to_ascii_uppercase()));
            assert!(lookup(ch).is_some());
        }
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold('q'), Some('Q'));
        assert_eq!(fold('7'), Some('7'));
        assert_eq!(fold('ß'), None);
    }

    #[test]
    fn test_unknown_falls_back_to_placeholder() {
        assert!(lookup('@').is_none());
        assert_eq!(glyph_for('@'), PLACEHOLDER);
        assert_eq!(glyph_for('~'), PLACEHOLDER);
        assert_eq!(glyph_for('ß'), PLACEHOLDER);
    }

    #[test]
    fn test_placeholder_shape() {
        for row in 0..GLYPH_HEIGHT {
            let expected = if row == 3 { "00100" } else { "00000" };
            assert_eq!(PLACEHOLDER.row_pattern(row), expected);
        }
    }

    #[test]
    fn test_supported_chars() {
        let chars = supported_chars();
        assert_eq!(chars.len(), 44);
        assert_eq!(chars[0], 'A');
        assert!(chars.contains(&' '));
        assert!(chars.contains(&'\''));
        assert!(is_supported('z'));
        assert!(!is_supported('#'));
    }
}
