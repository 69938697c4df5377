//! Start-up configuration for [`crate::Marquee`].

use crate::types::{ColorChoice, FontId, FramePolicy, Rotation};

/// Message shown until one is set.
pub const DEFAULT_MESSAGE: &str = "Please set a message";

/// Default milliseconds per pixel of scroll.
pub const DEFAULT_SCROLL_DELAY: u8 = 50;

/// Initial marquee settings.
///
/// # Example
/// ```
/// use led_marquee::{ColorChoice, FramePolicy, MarqueeConfig};
///
/// let config = MarqueeConfig::default()
///     .with_scroll_delay(30)
///     .with_brightness(170)
///     .with_frame_policy(FramePolicy::CatchUp);
/// assert_eq!(config.color, ColorChoice::Rainbow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeConfig {
    pub message: &'static str,
    pub color: ColorChoice,
    pub brightness: u8,
    pub scroll_delay: u8,
    pub font: FontId,
    pub rotation: Rotation,
    pub frame_policy: FramePolicy,
}

impl MarqueeConfig {
    pub const fn new() -> Self {
        Self {
            message: DEFAULT_MESSAGE,
            color: ColorChoice::Rainbow,
            brightness: 255,
            scroll_delay: DEFAULT_SCROLL_DELAY,
            font: FontId::Classic,
            rotation: Rotation::Down,
            frame_policy: FramePolicy::SingleFrame,
        }
    }

    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub const fn with_scroll_delay(mut self, delay: u8) -> Self {
        self.scroll_delay = delay;
        self
    }

    pub const fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn with_frame_policy(mut self, policy: FramePolicy) -> Self {
        self.frame_policy = policy;
        self
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self::new()
    }
}
