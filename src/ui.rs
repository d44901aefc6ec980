//! User Interface
//!
//! Character display abstraction plus the dial scale and presenter that
//! draw the front panel on it.

pub mod glyphs;
pub mod presenter;
pub mod scale;

/// Display width in character cells
pub const COLUMNS: u8 = crate::config::LCD_COLUMNS;

/// Display height in character cells
pub const ROWS: u8 = crate::config::LCD_ROWS;

/// 5x8 glyph bitmap, one byte per pixel row (low five bits used)
pub type GlyphBitmap = [u8; 8];

/// Fixed-grid character cell display
///
/// Glyph ids 0..=7 address the user-defined glyph slots; any other id is a
/// character from the controller's built-in ROM.
pub trait CharacterDisplay {
    /// Bus error
    type Error;

    /// Move the write position to `col`, `row`
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Self::Error>;

    /// Write one glyph at the cursor and advance
    fn write_glyph(&mut self, glyph: u8) -> Result<(), Self::Error>;

    /// Write ASCII text at the cursor and advance
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Load a user-defined glyph into slot `id` (0..=7)
    fn define_glyph(&mut self, id: u8, bitmap: &GlyphBitmap) -> Result<(), Self::Error>;

    /// Blank every cell and home the cursor
    fn clear(&mut self) -> Result<(), Self::Error> {
        for row in 0..ROWS {
            self.set_cursor(0, row)?;
            for _ in 0..COLUMNS {
                self.write_text(" ")?;
            }
        }
        self.set_cursor(0, 0)
    }
}
