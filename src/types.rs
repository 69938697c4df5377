//! Core value types shared by the engine, the settings catalog and display sinks.

use crate::colors::{self, Rgb};

/// What color the message is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColorChoice {
    /// Per-character hue cycling.
    #[default]
    Rainbow,

    /// A single color for the whole message.
    Solid(Rgb),
}

impl ColorChoice {
    /// Maps black to [`ColorChoice::Rainbow`], anything else to [`ColorChoice::Solid`].
    ///
    /// Palette tables and hex strings use `#000000` to select rainbow mode.
    pub fn from_rgb(color: Rgb) -> Self {
        if colors::is_black(color) {
            ColorChoice::Rainbow
        } else {
            ColorChoice::Solid(color)
        }
    }

    /// Inverse of [`ColorChoice::from_rgb`]: rainbow reads back as black.
    pub fn to_rgb(self) -> Rgb {
        match self {
            ColorChoice::Rainbow => colors::BLACK,
            ColorChoice::Solid(color) => color,
        }
    }

    #[inline]
    pub fn is_rainbow(&self) -> bool {
        matches!(self, ColorChoice::Rainbow)
    }
}

impl From<Rgb> for ColorChoice {
    fn from(color: Rgb) -> Self {
        ColorChoice::from_rgb(color)
    }
}

/// Display rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Rotation {
    #[default]
    Down = 0,
    Left = 1,
    Up = 2,
    Right = 3,
}

impl Rotation {
    /// Converts a quarter turn count, saturating at [`Rotation::Right`].
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Rotation::Down,
            1 => Rotation::Left,
            2 => Rotation::Up,
            _ => Rotation::Right,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// True for the two rotations that turn the matrix on its side.
    #[inline]
    pub const fn is_sideways(self) -> bool {
        matches!(self, Rotation::Left | Rotation::Right)
    }
}

impl From<u8> for Rotation {
    fn from(index: u8) -> Self {
        Rotation::from_index(index)
    }
}

/// Built-in font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontId {
    /// Classic 5x7 font with a fixed 6 pixel advance.
    #[default]
    Classic = 0,
    Fixed = 1,
    FixedMono = 2,
    Ancient = 3,
}

impl FontId {
    pub const COUNT: usize = 4;

    /// Converts an index, saturating at the last font.
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => FontId::Classic,
            1 => FontId::Fixed,
            2 => FontId::FixedMono,
            _ => FontId::Ancient,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl From<u8> for FontId {
    fn from(index: u8) -> Self {
        FontId::from_index(index)
    }
}

/// How [`crate::Marquee::update`] handles time worth more than one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramePolicy {
    /// Advance at most one frame per update. Leftover time carries over, so
    /// scrolling slows down when updates come in slower than the delay.
    #[default]
    SingleFrame,

    /// Advance one pixel for every whole delay elapsed and draw only the
    /// final position.
    CatchUp,
}

/// Result of a single [`crate::Marquee::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameOutcome {
    /// Not enough time has accumulated, nothing was drawn.
    Idle,

    /// A frame was drawn and the message moved left.
    Drawn,

    /// A frame was drawn and the message wrapped back to the right edge.
    Wrapped,
}

/// Errors raised while turning external settings input into engine actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Option index does not exist in the table.
    IndexOutOfRange {
        /// Requested index.
        index: u8,
        /// Number of options in the table.
        count: u8,
    },

    /// The pending action queue is full.
    QueueFull,
}

impl core::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SettingsError::IndexOutOfRange { index, count } => {
                write!(f, "option index {} out of range (have {})", index, count)
            }
            SettingsError::QueueFull => {
                write!(f, "settings queue is full")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}
