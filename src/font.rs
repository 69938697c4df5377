//! Font metrics used to lay out the message.
//!
//! The engine never rasterizes glyphs itself; it only needs horizontal
//! advances to know how wide the message is and a vertical offset for the
//! cursor. Glyph bitmaps stay with the display sink.

use crate::types::{FontId, Rotation};

/// Advance of the classic fixed-width font, also used for glyphs a
/// proportional font does not cover.
pub const DEFAULT_ADVANCE: u32 = 6;

/// Extra vertical offset when the matrix is turned on its side.
const SIDEWAYS_Y_SHIFT: i32 = 2;

/// Per-glyph horizontal advances for a contiguous range of character codes.
#[derive(Debug, Clone, Copy)]
pub struct GlyphAdvances {
    /// First covered character code.
    pub first: u8,
    /// Advance of each glyph from `first` onward.
    pub advances: &'static [u8],
}

impl GlyphAdvances {
    /// Last covered character code.
    pub fn last(&self) -> u32 {
        (self.first as u32 + self.advances.len() as u32).saturating_sub(1)
    }

    fn advance(&self, code: u32) -> Option<u32> {
        let offset = code.checked_sub(self.first as u32)?;
        self.advances.get(offset as usize).map(|&a| a as u32)
    }
}

/// Layout metrics of one font.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    /// `None` for the classic font, which advances every glyph by [`DEFAULT_ADVANCE`].
    pub glyphs: Option<GlyphAdvances>,
    /// Cursor y offset for this font.
    pub y_offset: i32,
}

impl Font {
    /// The classic 5x7 font: fixed 6 pixel advance, baseline at the top.
    pub const CLASSIC: Font = Font {
        glyphs: None,
        y_offset: 1,
    };

    pub const fn new(glyphs: GlyphAdvances, y_offset: i32) -> Self {
        Self {
            glyphs: Some(glyphs),
            y_offset,
        }
    }

    /// Horizontal advance of a single character.
    pub fn char_width(&self, c: char) -> u32 {
        match self.glyphs {
            Some(glyphs) => glyphs.advance(c as u32).unwrap_or(DEFAULT_ADVANCE),
            None => DEFAULT_ADVANCE,
        }
    }

    /// Sum of the advances of every character in `text`.
    pub fn text_width(&self, text: &str) -> u32 {
        match self.glyphs {
            None => text.chars().count() as u32 * DEFAULT_ADVANCE,
            Some(_) => text.chars().map(|c| self.char_width(c)).sum(),
        }
    }

    /// Cursor y offset for the given rotation.
    pub fn y_offset(&self, rotation: Rotation) -> i32 {
        if rotation.is_sideways() {
            self.y_offset + SIDEWAYS_Y_SHIFT
        } else {
            self.y_offset
        }
    }
}

/// Looks up the metrics for a [`FontId`].
pub trait FontSet {
    fn font(&self, id: FontId) -> &Font;
}

impl FontSet for Font {
    fn font(&self, _id: FontId) -> &Font {
        self
    }
}

/// Indexed by [`FontId`]; ids past the end use the last entry.
impl<const N: usize> FontSet for [Font; N] {
    fn font(&self, id: FontId) -> &Font {
        const { assert!(N > 0, "font table must not be empty") };
        &self[(id.index() as usize).min(N - 1)]
    }
}
