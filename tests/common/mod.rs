//! Shared test infrastructure for led-marquee integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::time::Duration;

use led_marquee::{FontId, MarqueeDisplay, Millis, Rotation, TimeInstant, TimeSource};

// ============================================================================
// Mock Display
// ============================================================================

/// Everything the marquee asked the display to do, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
    Clear,
    Cursor(i32, i32),
    Color(u16),
    Char(char),
    Show,
    Rotation(Rotation),
    Font(FontId),
}

/// Mock display that records every call
pub struct MockDisplay {
    width: i32,
    ops: Vec<DisplayOp>,
}

impl MockDisplay {
    /// The 13x9 matrix the marquee was built for
    pub fn new() -> Self {
        Self::with_width(13)
    }

    pub fn with_width(width: i32) -> Self {
        Self {
            width,
            ops: Vec::new(),
        }
    }

    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    pub fn ops(&self) -> &[DisplayOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn frames_shown(&self) -> usize {
        self.ops.iter().filter(|op| **op == DisplayOp::Show).count()
    }

    /// Ops of the most recent frame, from its `Clear` up to its `Show`.
    pub fn last_frame(&self) -> &[DisplayOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DisplayOp::Clear)
            .unwrap_or(0);
        &self.ops[start..]
    }

    /// Cursor position of the most recent frame.
    pub fn last_cursor(&self) -> Option<(i32, i32)> {
        self.last_frame().iter().find_map(|op| match op {
            DisplayOp::Cursor(x, y) => Some((*x, *y)),
            _ => None,
        })
    }

    /// Colors set during the most recent frame.
    pub fn last_colors(&self) -> Vec<u16> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Color(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Characters written during the most recent frame.
    pub fn last_text(&self) -> String {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Char(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl MarqueeDisplay for MockDisplay {
    fn width(&self) -> i32 {
        self.width
    }

    fn clear(&mut self) {
        self.ops.push(DisplayOp::Clear);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.ops.push(DisplayOp::Cursor(x, y));
    }

    fn set_text_color(&mut self, color: u16) {
        self.ops.push(DisplayOp::Color(color));
    }

    fn write_char(&mut self, c: char) {
        self.ops.push(DisplayOp::Char(c));
    }

    fn show(&mut self) {
        self.ops.push(DisplayOp::Show);
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.ops.push(DisplayOp::Rotation(rotation));
    }

    fn set_font(&mut self, font: FontId) {
        self.ops.push(DisplayOp::Font(font));
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock millisecond counter with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: core::cell::Cell::new(millis),
        }
    }

    /// Advance time by the given number of milliseconds, rolling over like a hardware counter
    pub fn advance(&self, millis: u32) {
        self.current_time
            .set(self.current_time.get().wrapping_add(millis));
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        Millis(self.current_time.get())
    }
}

/// Instant with microsecond resolution, finer than the frame clock's deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicrosInstant(pub u64);

impl TimeInstant for MicrosInstant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Duration {
        Duration::from_micros(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0
            .checked_add(duration.as_micros() as u64)
            .map(MicrosInstant)
    }
}

/// Mock microsecond timer
pub struct MockMicrosSource {
    current_time: core::cell::Cell<u64>,
}

impl MockMicrosSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(0),
        }
    }

    pub fn advance_micros(&self, micros: u64) {
        self.current_time.set(self.current_time.get() + micros);
    }
}

impl TimeSource<MicrosInstant> for MockMicrosSource {
    fn now(&self) -> MicrosInstant {
        MicrosInstant(self.current_time.get())
    }
}
