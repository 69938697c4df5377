//! Scrolling marquee engine.
//!
//! Provides [`Marquee`], which owns the scroll clock, the message layout and
//! the color settings, and draws each frame onto a [`MarqueeDisplay`].

use crate::colors::{self, Rgb};
use crate::command::MarqueeAction;
use crate::config::MarqueeConfig;
use crate::display::MarqueeDisplay;
use crate::font::FontSet;
use crate::hsv::Hsv;
use crate::message::Message;
use crate::time::{FrameClock, TimeInstant, TimeSource};
use crate::types::{ColorChoice, FontId, FramePolicy, FrameOutcome, Rotation};

/// Hue distance between neighbouring characters in rainbow mode. Twelve
/// characters cover the whole color wheel.
pub const HUE_STEP: u16 = (65536 / 12) as u16;

/// Converts an HSV color to the RGB565 value sent to the display, with gamma
/// correction applied.
#[inline]
pub fn frame_color(hsv: Hsv) -> u16 {
    colors::pack565(colors::gamma_applied(hsv.to_rgb()))
}

/// Hue of the character at `index` for a given hue cursor.
#[inline]
pub fn rainbow_hue(cursor: u16, index: usize) -> u16 {
    ((cursor as u32 + index as u32 * HUE_STEP as u32) & 0xFFFF) as u16
}

/// Read-only view of the marquee's current settings and scroll state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeStatus<'a> {
    pub message: &'a str,
    pub color: ColorChoice,
    pub brightness: u8,
    pub scroll_delay: u8,
    pub font: FontId,
    pub rotation: Rotation,
    pub position: i32,
    pub hue_cursor: u16,
}

/// Scrolls a single line of text across an LED matrix.
///
/// The caller feeds elapsed milliseconds into [`Marquee::update`] from its
/// main loop. Every `scroll_delay` milliseconds the marquee draws the
/// message at the current position and moves it one pixel left. Once the
/// message has scrolled completely off the left edge it restarts at the
/// right edge.
///
/// Colors are either a single solid color or a rainbow where each character
/// gets its own hue. Solid colors are stored at full HSV value so brightness
/// can be reapplied on every frame without losing the hue.
///
/// # Type Parameters
/// * `D` - Display sink implementation type
/// * `F` - Font metrics lookup
pub struct Marquee<D: MarqueeDisplay, F: FontSet> {
    display: D,
    fonts: F,
    message: Message,
    color: ColorChoice,
    brightness: u8,
    scroll_delay: u8,
    font: FontId,
    rotation: Rotation,
    frame_policy: FramePolicy,
    position: i32,
    scroll_elapsed: u32,
    hue_cursor: u16,
}

impl<D: MarqueeDisplay, F: FontSet> Marquee<D, F> {
    /// Creates a marquee with the default configuration.
    pub fn new(display: D, fonts: F) -> Self {
        Self::with_config(display, fonts, MarqueeConfig::default())
    }

    /// Creates a marquee and pushes the configured rotation and font to the display.
    pub fn with_config(mut display: D, fonts: F, config: MarqueeConfig) -> Self {
        display.set_rotation(config.rotation);
        display.set_font(config.font);
        let position = display.width();

        let mut marquee = Self {
            display,
            fonts,
            message: Message::new(),
            color: ColorChoice::Rainbow,
            brightness: config.brightness,
            scroll_delay: config.scroll_delay,
            font: config.font,
            rotation: config.rotation,
            frame_policy: config.frame_policy,
            position,
            scroll_elapsed: 0,
            hue_cursor: 0,
        };

        marquee.set_color(config.color);
        marquee.set_message(config.message);
        marquee
    }

    /// Handles a settings action by dispatching to the matching setter.
    pub fn handle_action(&mut self, action: MarqueeAction) {
        match action {
            MarqueeAction::SetMessage(text) => {
                self.set_message(&text);
            }
            MarqueeAction::SetColor(color) => self.set_color(color),
            MarqueeAction::SetBrightness(brightness) => self.set_brightness(brightness),
            MarqueeAction::SetScrollDelay(delay) => self.set_scroll_delay(delay),
            MarqueeAction::SetFont(font) => self.set_font(font),
            MarqueeAction::SetRotation(rotation) => self.set_rotation(rotation),
        }
    }

    /// Applies every pending action from `next` until it returns `None`.
    ///
    /// Pass the dequeue of an [`crate::ActionQueue`] consumer, e.g.
    /// `marquee.apply_pending(|| consumer.dequeue())`. Returns the number of
    /// actions applied.
    pub fn apply_pending<Q>(&mut self, mut next: Q) -> usize
    where
        Q: FnMut() -> Option<MarqueeAction>,
    {
        let mut applied = 0;
        while let Some(action) = next() {
            self.handle_action(action);
            applied += 1;
        }
        applied
    }

    /// Applies pending actions, then advances the animation by `dt` milliseconds.
    ///
    /// Settings changes land between frames, so each frame is drawn from one
    /// consistent set of values.
    pub fn tick<Q>(&mut self, dt: u32, next: Q) -> FrameOutcome
    where
        Q: FnMut() -> Option<MarqueeAction>,
    {
        self.apply_pending(next);
        self.update(dt)
    }

    /// Reads the elapsed time from `clock` and advances the animation.
    ///
    /// Nothing happens while less than a millisecond has passed.
    pub fn service<I, T>(&mut self, clock: &mut FrameClock<'_, I, T>) -> FrameOutcome
    where
        I: TimeInstant,
        T: TimeSource<I>,
    {
        match clock.tick() {
            0 => FrameOutcome::Idle,
            dt => self.update(dt),
        }
    }

    /// Advances the animation by `dt` milliseconds.
    ///
    /// Once the accumulated time reaches the scroll delay, the frame at the
    /// current position is drawn and the message moves one pixel left. With
    /// [`FramePolicy::SingleFrame`] at most one delay is consumed per call;
    /// with [`FramePolicy::CatchUp`] every whole delay elapsed moves the
    /// message and only the last position is drawn. A zero delay draws one
    /// frame per call.
    pub fn update(&mut self, dt: u32) -> FrameOutcome {
        self.scroll_elapsed = self.scroll_elapsed.saturating_add(dt);

        let delay = self.scroll_delay as u32;
        if self.scroll_elapsed < delay {
            return FrameOutcome::Idle;
        }

        let frames = if delay == 0 {
            self.scroll_elapsed = 0;
            1
        } else {
            let frames = match self.frame_policy {
                FramePolicy::SingleFrame => 1,
                FramePolicy::CatchUp => self.scroll_elapsed / delay,
            };
            self.scroll_elapsed -= frames * delay;
            frames
        };

        if frames > 1 {
            trace!("catching up {} frames", frames);
        }

        let mut wrapped = self.skip(frames - 1);

        self.draw();
        wrapped |= self.step();

        if wrapped {
            FrameOutcome::Wrapped
        } else {
            FrameOutcome::Drawn
        }
    }

    /// Moves `steps` pixels left without drawing. Returns true if any step wrapped.
    ///
    /// Whole scroll passes land back on the same position, so they only
    /// advance the hue cursor.
    fn skip(&mut self, mut steps: u32) -> bool {
        let mut wrapped = false;
        let width = self.display.width();

        if self.position <= width {
            let period = (width as i64 + self.message.width() as i64 + 1).max(1) as u64;
            let passes = steps as u64 / period;
            if passes > 0 {
                let advance = passes * self.message.len() as u64 * HUE_STEP as u64;
                self.hue_cursor = ((self.hue_cursor as u64 + advance) & 0xFFFF) as u16;
                steps = (steps as u64 % period) as u32;
                wrapped = true;
                trace!("skipped {} passes", passes);
            }
        }

        for _ in 0..steps {
            wrapped |= self.step();
        }
        wrapped
    }

    /// Moves one pixel left, wrapping to the right edge once the message is
    /// fully off screen. Returns true on wrap.
    fn step(&mut self) -> bool {
        self.position -= 1;

        if self.position < -(self.message.width() as i32) {
            self.position = self.display.width();

            // The next pass picks up the hue where the last character left off.
            self.hue_cursor = rainbow_hue(self.hue_cursor, self.message.len());
            debug!("message wrapped, hue cursor {}", self.hue_cursor);
            return true;
        }

        false
    }

    fn draw(&mut self) {
        let y = self.fonts.font(self.font).y_offset(self.rotation);

        self.display.clear();
        self.display.set_cursor(self.position, y);

        match self.color {
            ColorChoice::Rainbow => {
                for (i, c) in self.message.as_str().chars().enumerate() {
                    let hue = rainbow_hue(self.hue_cursor, i);
                    let hsv = Hsv::new(hue, 255, self.brightness);
                    self.display.set_text_color(frame_color(hsv));
                    self.display.write_char(c);
                }
            }
            ColorChoice::Solid(color) => {
                let packed = self.solid_frame_color(color);
                self.display.set_text_color(packed);
                self.display.write_str(self.message.as_str());
            }
        }

        self.display.show();
        trace!("frame drawn at x={}", self.position);
    }

    /// Solid colors go through HSV so the value channel can be replaced by the
    /// current brightness.
    fn solid_frame_color(&self, color: Rgb) -> u16 {
        if colors::is_black(color) {
            return 0;
        }
        frame_color(Hsv::from_rgb(color).with_value(self.brightness))
    }

    /// Recomputes the message width and restarts the scroll at the right edge.
    ///
    /// Also clears the elapsed time and the rainbow hue cursor.
    pub fn reset_scroll(&mut self) {
        self.message.relayout(self.fonts.font(self.font));
        self.position = self.display.width();
        self.scroll_elapsed = 0;
        self.hue_cursor = 0;
    }

    /// Replaces the message and restarts the scroll, even if the text is unchanged.
    ///
    /// Text longer than [`crate::MAX_MESSAGE_LEN`] bytes is truncated.
    /// Returns `false` if the text was cut.
    pub fn set_message(&mut self, text: &str) -> bool {
        let complete = self.message.set(text, self.fonts.font(self.font));
        if complete {
            info!("message set: {} bytes", self.message.as_str().len());
        } else {
            warn!("message truncated to {} bytes", self.message.as_str().len());
        }
        self.reset_scroll();
        complete
    }

    /// Sets the draw color.
    ///
    /// Solid colors are normalized to full HSV value. Switching to rainbow
    /// from another color restarts the hue cursor. Setting the color that is
    /// already active does nothing.
    pub fn set_color(&mut self, color: impl Into<ColorChoice>) {
        let color = match color.into() {
            ColorChoice::Solid(rgb) if !colors::is_black(rgb) => {
                ColorChoice::Solid(Hsv::from_rgb(rgb).with_value(255).to_rgb())
            }
            other => other,
        };

        if color == self.color {
            return;
        }

        if color.is_rainbow() {
            self.hue_cursor = 0;
        }

        self.color = color;
        debug!("color set to {:x}", colors::to_packed(color.to_rgb()));
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
        debug!("brightness set to {}", brightness);
    }

    /// Sets the milliseconds per pixel of scroll.
    pub fn set_scroll_delay(&mut self, delay: u8) {
        self.scroll_delay = delay;
        debug!("scroll delay set to {} ms", delay);
    }

    /// Switches font and restarts the scroll with the new message width.
    pub fn set_font(&mut self, font: FontId) {
        self.font = font;
        self.display.set_font(font);
        self.reset_scroll();
        debug!("font set to {}", font);
    }

    /// Rotates the display. Out of range indices saturate at [`Rotation::Right`].
    pub fn set_rotation(&mut self, rotation: impl Into<Rotation>) {
        let rotation = rotation.into();
        self.rotation = rotation;
        self.display.set_rotation(rotation);
        debug!("rotation set to {}", rotation);
    }

    pub fn set_frame_policy(&mut self, policy: FramePolicy) {
        self.frame_policy = policy;
    }

    /// Returns the current message text.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Message width in pixels under the current font.
    pub fn message_width(&self) -> u32 {
        self.message.width()
    }

    /// Returns the active color, solid colors at full value.
    pub fn color(&self) -> ColorChoice {
        self.color
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn scroll_delay(&self) -> u8 {
        self.scroll_delay
    }

    pub fn font(&self) -> FontId {
        self.font
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn frame_policy(&self) -> FramePolicy {
        self.frame_policy
    }

    /// X coordinate the next frame will be drawn at.
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Milliseconds accumulated towards the next frame.
    pub fn scroll_elapsed(&self) -> u32 {
        self.scroll_elapsed
    }

    /// Hue of the first character in rainbow mode.
    pub fn hue_cursor(&self) -> u16 {
        self.hue_cursor
    }

    /// Snapshot of settings and scroll state for status reporting.
    pub fn status(&self) -> MarqueeStatus<'_> {
        MarqueeStatus {
            message: self.message.as_str(),
            color: self.color,
            brightness: self.brightness,
            scroll_delay: self.scroll_delay,
            font: self.font,
            rotation: self.rotation,
            position: self.position,
            hue_cursor: self.hue_cursor,
        }
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns a mutable reference to the display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consumes the marquee, returning the display and fonts.
    pub fn release(self) -> (D, F) {
        (self.display, self.fonts)
    }
}
