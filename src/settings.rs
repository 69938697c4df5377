//! Catalog of user-selectable marquee options.
//!
//! Every setting is a small table of named values. A settings front end (web
//! form, JSON API, buttons) works with option indices; this module validates
//! them and turns accepted changes into [`MarqueeAction`]s for the render loop.

use crate::colors;
use crate::command::MarqueeAction;
use crate::config::MarqueeConfig;
use crate::types::{ColorChoice, FontId, Rotation, SettingsError};

/// Named color option, stored as a `#RRGGBB` string. `#000000` selects rainbow mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub hex: &'static str,
}

impl ColorOption {
    pub fn choice(&self) -> ColorChoice {
        ColorChoice::from_rgb(colors::from_hex_string(Some(self.hex)))
    }
}

/// Named byte-valued option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteOption {
    pub name: &'static str,
    pub value: u8,
}

// Several colors lean away from red, which dominates on the matrix at 3.3 V.
pub static COLORS: [ColorOption; 10] = [
    ColorOption { name: "Rainbow", hex: "#000000" },
    ColorOption { name: "White", hex: "#CFFFFF" },
    ColorOption { name: "Red", hex: "#FF0000" },
    ColorOption { name: "Orange", hex: "#E0A500" },
    ColorOption { name: "Yellow", hex: "#CFFF00" },
    ColorOption { name: "Green", hex: "#00FF00" },
    ColorOption { name: "Cyan", hex: "#00FFFF" },
    ColorOption { name: "Blue", hex: "#0000FF" },
    ColorOption { name: "Purple", hex: "#8000FF" },
    ColorOption { name: "Magenta", hex: "#FF00FF" },
];

pub static FONTS: [ByteOption; 4] = [
    ByteOption { name: "Adafruit", value: FontId::Classic as u8 },
    ByteOption { name: "Fixed", value: FontId::Fixed as u8 },
    ByteOption { name: "Fixed Mono", value: FontId::FixedMono as u8 },
    ByteOption { name: "Ancient", value: FontId::Ancient as u8 },
];

pub static SCROLL_DELAYS: [ByteOption; 5] = [
    ByteOption { name: "Very Slow", value: 100 },
    ByteOption { name: "Slow", value: 75 },
    ByteOption { name: "Moderate", value: 50 },
    ByteOption { name: "Fast", value: 30 },
    ByteOption { name: "Very Fast", value: 20 },
];

pub static BRIGHTNESS_LEVELS: [ByteOption; 5] = [
    ByteOption { name: "Very Dim", value: 70 },
    ByteOption { name: "Dim", value: 126 },
    ByteOption { name: "Moderate", value: 170 },
    ByteOption { name: "Bright", value: 220 },
    ByteOption { name: "Very Bright", value: 255 },
];

pub static ROTATIONS: [ByteOption; 4] = [
    ByteOption { name: "Down", value: 0 },
    ByteOption { name: "Left", value: 1 },
    ByteOption { name: "Up", value: 2 },
    ByteOption { name: "Right", value: 3 },
];

/// A table of options with one selected entry.
#[derive(Debug, Clone, Copy)]
pub struct IndexedSetting<T: 'static> {
    items: &'static [T],
    index: u8,
}

impl<T: 'static> IndexedSetting<T> {
    /// Creates a setting over `items`, selecting `initial`.
    ///
    /// # Panics
    /// Panics if `items` is empty, has more than 255 entries, or `initial`
    /// is out of range.
    pub const fn new(items: &'static [T], initial: u8) -> Self {
        assert!(!items.is_empty() && items.len() <= u8::MAX as usize);
        assert!((initial as usize) < items.len());
        Self {
            items,
            index: initial,
        }
    }

    pub fn count(&self) -> u8 {
        self.items.len() as u8
    }

    /// Option at `index`, or the first option if out of range.
    pub fn get(&self, index: u8) -> &T {
        self.items.get(index as usize).unwrap_or(&self.items[0])
    }

    pub fn current(&self) -> &T {
        &self.items[self.index as usize]
    }

    pub fn current_index(&self) -> u8 {
        self.index
    }

    /// Selects `index`.
    ///
    /// # Returns
    /// * `Ok(true)` - The selection changed
    /// * `Ok(false)` - `index` was already selected
    /// * `Err` - `index` is out of range
    pub fn set_index(&mut self, index: u8) -> Result<bool, SettingsError> {
        if index as usize >= self.items.len() {
            return Err(SettingsError::IndexOutOfRange {
                index,
                count: self.count(),
            });
        }

        if index == self.index {
            return Ok(false);
        }

        self.index = index;
        Ok(true)
    }

    /// Iterates over all options in table order.
    pub fn iter(&self) -> core::slice::Iter<'static, T> {
        self.items.iter()
    }
}

/// Current selection for every marquee option.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub colors: IndexedSetting<ColorOption>,
    pub fonts: IndexedSetting<ByteOption>,
    pub scroll_delays: IndexedSetting<ByteOption>,
    pub brightness_levels: IndexedSetting<ByteOption>,
    pub rotations: IndexedSetting<ByteOption>,
}

impl Settings {
    /// Rainbow, classic font, slow scroll, moderate brightness, rotated up.
    pub const fn new() -> Self {
        Self {
            colors: IndexedSetting::new(&COLORS, 0),
            fonts: IndexedSetting::new(&FONTS, 0),
            scroll_delays: IndexedSetting::new(&SCROLL_DELAYS, 1),
            brightness_levels: IndexedSetting::new(&BRIGHTNESS_LEVELS, 2),
            rotations: IndexedSetting::new(&ROTATIONS, 2),
        }
    }

    /// Marquee configuration matching the current selections.
    pub fn config(&self) -> MarqueeConfig {
        MarqueeConfig::default()
            .with_color(self.colors.current().choice())
            .with_font(FontId::from_index(self.fonts.current().value))
            .with_scroll_delay(self.scroll_delays.current().value)
            .with_brightness(self.brightness_levels.current().value)
            .with_rotation(Rotation::from_index(self.rotations.current().value))
    }

    /// Selects a color. Returns the action to apply if the selection changed.
    pub fn select_color(&mut self, index: u8) -> Result<Option<MarqueeAction>, SettingsError> {
        if !self.colors.set_index(index)? {
            return Ok(None);
        }
        let option = self.colors.current();
        debug!("color index {}: {}", index, option.name);
        Ok(Some(MarqueeAction::SetColor(option.choice())))
    }

    pub fn select_font(&mut self, index: u8) -> Result<Option<MarqueeAction>, SettingsError> {
        if !self.fonts.set_index(index)? {
            return Ok(None);
        }
        let option = self.fonts.current();
        debug!("font index {}: {}", index, option.name);
        Ok(Some(MarqueeAction::SetFont(FontId::from_index(option.value))))
    }

    pub fn select_scroll_delay(&mut self, index: u8) -> Result<Option<MarqueeAction>, SettingsError> {
        if !self.scroll_delays.set_index(index)? {
            return Ok(None);
        }
        let value = self.scroll_delays.current().value;
        debug!("speed index {}: {} ms", index, value);
        Ok(Some(MarqueeAction::SetScrollDelay(value)))
    }

    pub fn select_brightness(&mut self, index: u8) -> Result<Option<MarqueeAction>, SettingsError> {
        if !self.brightness_levels.set_index(index)? {
            return Ok(None);
        }
        let value = self.brightness_levels.current().value;
        debug!("brightness index {}: {}", index, value);
        Ok(Some(MarqueeAction::SetBrightness(value)))
    }

    pub fn select_rotation(&mut self, index: u8) -> Result<Option<MarqueeAction>, SettingsError> {
        if !self.rotations.set_index(index)? {
            return Ok(None);
        }
        let value = self.rotations.current().value;
        debug!("rotation index {}: {}", index, value);
        Ok(Some(MarqueeAction::SetRotation(Rotation::from_index(value))))
    }

    /// Returns a message action unless `text` is empty or equal to `current`.
    pub fn select_message(&self, text: &str, current: &str) -> Option<MarqueeAction> {
        if text.is_empty() || text == current {
            return None;
        }
        Some(MarqueeAction::set_message(text))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends an action through an [`crate::ActionQueue`] producer's `enqueue`.
///
/// ```
/// use led_marquee::{ActionQueue, MarqueeAction, settings};
///
/// let mut queue: ActionQueue<4> = ActionQueue::new();
/// let (mut producer, mut consumer) = queue.split();
/// settings::send(|a| producer.enqueue(a), MarqueeAction::SetBrightness(70)).unwrap();
/// assert_eq!(consumer.dequeue(), Some(MarqueeAction::SetBrightness(70)));
/// ```
pub fn send<E>(mut enqueue: E, action: MarqueeAction) -> Result<(), SettingsError>
where
    E: FnMut(MarqueeAction) -> Result<(), MarqueeAction>,
{
    enqueue(action).map_err(|_| {
        warn!("settings queue full, dropping action");
        SettingsError::QueueFull
    })
}
