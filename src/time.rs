//! Time abstraction traits and the frame clock that feeds [`crate::Marquee`].

use core::time::Duration;

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to whole milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

impl TimeDuration for Duration {
    fn as_millis(&self) -> u64 {
        Duration::as_millis(self) as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration::from_millis(millis)
    }
}

/// Free-running 32-bit millisecond counter, as returned by most HAL `millis()` calls.
///
/// Differences are taken modulo 2^32, so the counter may roll over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeInstant for Millis {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Duration {
        Duration::from_millis(self.0.wrapping_sub(earlier.0) as u64)
    }

    fn checked_add(self, duration: Duration) -> Option<Self> {
        Some(Millis(self.0.wrapping_add(duration.as_millis() as u32)))
    }
}

#[cfg(feature = "std")]
impl TimeInstant for std::time::Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Duration {
        self.saturating_duration_since(earlier)
    }

    fn checked_add(self, duration: Duration) -> Option<Self> {
        std::time::Instant::checked_add(&self, duration)
    }
}

/// [`TimeSource`] backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTimeSource;

#[cfg(feature = "std")]
impl TimeSource<std::time::Instant> for StdTimeSource {
    fn now(&self) -> std::time::Instant {
        std::time::Instant::now()
    }
}

/// Turns a time source into the per-iteration millisecond deltas that
/// [`crate::Marquee::update`] expects.
pub struct FrameClock<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    last: I,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> FrameClock<'t, I, T> {
    /// Starts measuring from the current instant.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            last: time_source.now(),
        }
    }

    /// Returns whole milliseconds since the previous tick.
    ///
    /// The reference instant only moves forward by the milliseconds
    /// returned, so sub-millisecond remainders carry into the next tick.
    pub fn tick(&mut self) -> u32 {
        let now = self.time_source.now();
        let millis = now
            .duration_since(self.last)
            .as_millis()
            .min(u32::MAX as u64);
        if millis == 0 {
            return 0;
        }

        self.last = self
            .last
            .checked_add(I::Duration::from_millis(millis))
            .unwrap_or(now);
        millis as u32
    }
}
