//! Display sink abstraction.

use crate::types::{FontId, Rotation};

/// Trait for abstracting the LED matrix the marquee draws on.
///
/// Implement this for your matrix driver (I2C LED controller, HUB75 panel,
/// framebuffer, etc.). The sink owns pixel I/O, glyph rasterization,
/// rotation and any frame buffering; the marquee only positions the cursor,
/// picks the color and writes characters. Handle hardware errors internally,
/// these methods cannot fail.
pub trait MarqueeDisplay {
    /// Visible width in pixels under the current rotation.
    fn width(&self) -> i32;

    /// Clears the frame buffer.
    fn clear(&mut self);

    /// Moves the text cursor. `x` may be negative or past the right edge.
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Sets the RGB565 color used for subsequent characters.
    fn set_text_color(&mut self, color: u16);

    /// Draws one character at the cursor and advances it.
    fn write_char(&mut self, c: char);

    /// Draws a run of characters in the current color.
    fn write_str(&mut self, text: &str) {
        for c in text.chars() {
            self.write_char(c);
        }
    }

    /// Pushes the frame buffer to the LEDs.
    fn show(&mut self);

    /// Applies a new rotation.
    fn set_rotation(&mut self, rotation: Rotation);

    /// Selects the glyph set used by `write_char`.
    fn set_font(&mut self, font: FontId);
}
