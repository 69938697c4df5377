#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Marquee`**: Scrolls a message across an LED matrix, one pixel per scroll delay
//! - **`MarqueeDisplay`**: Trait to implement for your LED matrix driver
//! - **`FontSet`** / **`Font`**: Glyph advances used to measure the message
//! - **`ColorChoice`**: A solid color or per-character rainbow
//! - **`Hsv`**: Integer HSV color with a 16-bit hue
//! - **`MarqueeAction`**: Settings changes queued for the render loop
//! - **`Settings`**: Catalog of selectable colors, fonts, speeds, brightness levels and rotations
//! - **`FrameClock`**: Turns a `TimeSource` into millisecond deltas for `Marquee::update`
//!
//! All color math is 8-bit integer arithmetic; RGB values are `Srgb<u8>`
//! and frames are sent to the display as RGB565.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod colors;
pub mod command;
pub mod config;
pub mod display;
pub mod font;
pub mod hsv;
pub mod marquee;
pub mod message;
pub mod settings;
pub mod time;
pub mod types;

pub use colors::{BLACK, HexString, Rgb, WHITE};
pub use command::{ActionQueue, MarqueeAction};
pub use config::MarqueeConfig;
pub use display::MarqueeDisplay;
pub use font::{Font, FontSet, GlyphAdvances};
pub use hsv::Hsv;
pub use marquee::{HUE_STEP, Marquee, MarqueeStatus};
pub use message::{MAX_MESSAGE_LEN, Message, MessageText};
pub use settings::Settings;
pub use time::{FrameClock, Millis, TimeDuration, TimeInstant, TimeSource};
pub use types::{ColorChoice, FontId, FrameOutcome, FramePolicy, Rotation, SettingsError};

#[cfg(feature = "std")]
pub use time::StdTimeSource;
