//! Bounded message text with its cached pixel width.

use crate::font::Font;
use heapless::String;

/// Longest message in bytes. Firmware buffers hold one more byte for the
/// C string terminator.
pub const MAX_MESSAGE_LEN: usize = 511;

/// Owned message text.
pub type MessageText = String<MAX_MESSAGE_LEN>;

/// Message text plus its width under the font it was laid out with.
#[derive(Debug, Clone)]
pub struct Message {
    text: MessageText,
    width: u32,
}

impl Message {
    /// An empty message with zero width.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            width: 0,
        }
    }

    /// Replaces the text and recomputes the width.
    ///
    /// Text stops at the first NUL and is cut to [`MAX_MESSAGE_LEN`] bytes
    /// (never inside a UTF-8 sequence). Returns `false` if anything was cut.
    pub fn set(&mut self, text: &str, font: &Font) -> bool {
        let (kept, complete) = truncate(text);

        self.text.clear();
        // `truncate` never returns more than the capacity.
        let _ = self.text.push_str(kept);
        self.relayout(font);

        complete
    }

    /// Recomputes the cached width, e.g. after a font change.
    pub fn relayout(&mut self, font: &Font) {
        self.width = font.text_width(&self.text);
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Width in pixels under the font of the last layout.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

/// Cuts `text` at the first NUL and to the buffer capacity.
pub(crate) fn truncate(text: &str) -> (&str, bool) {
    let (text, terminated) = match text.find('\0') {
        Some(end) => (&text[..end], true),
        None => (text, false),
    };

    if text.len() <= MAX_MESSAGE_LEN {
        return (text, !terminated);
    }

    let mut end = MAX_MESSAGE_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    (&text[..end], false)
}

/// Copies `text` into an owned [`MessageText`], truncating like [`Message::set`].
pub fn message_text(text: &str) -> MessageText {
    let mut owned = MessageText::new();
    let _ = owned.push_str(truncate(text).0);
    owned
}
