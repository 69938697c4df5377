//! Command-based control for the marquee.
//!
//! Settings usually change from a different context than the render loop (a
//! network handler, a button interrupt). Instead of touching the marquee
//! directly, that context sends [`MarqueeAction`]s through a queue and the
//! render loop applies them between frames, so a frame never sees half of an
//! update.

use crate::message::{MessageText, message_text};
use crate::types::{ColorChoice, FontId, Rotation};

/// A single settings change.
#[derive(Debug, Clone, PartialEq)]
pub enum MarqueeAction {
    /// Replace the message text.
    SetMessage(MessageText),
    /// Change the draw color.
    SetColor(ColorChoice),
    /// Change brightness (0-255).
    SetBrightness(u8),
    /// Change milliseconds per one pixel of scroll.
    SetScrollDelay(u8),
    /// Change the font.
    SetFont(FontId),
    /// Change the display rotation.
    SetRotation(Rotation),
}

impl MarqueeAction {
    /// Builds a [`MarqueeAction::SetMessage`], truncating to the message capacity.
    pub fn set_message(text: &str) -> Self {
        MarqueeAction::SetMessage(message_text(text))
    }
}

/// Queue carrying actions from the settings context to the render loop.
///
/// Split it with `split()`; the producer goes to the settings side and the
/// consumer feeds [`crate::Marquee::apply_pending`].
pub type ActionQueue<const N: usize> = heapless::spsc::Queue<MarqueeAction, N>;
