//! Time abstraction traits for platform-agnostic timing.
//!
//! The gesture classifier measures debounce settle intervals and the
//! long-press threshold against a monotonic [`TimeSource`] rather than
//! counting loop iterations, so its timing does not depend on CPU speed.

/// Trait for abstracting a monotonic time source.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping hardware counter should use
    /// wrapping arithmetic so a wrap between the two reads still yields the
    /// true interval.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Busy-waits until `duration` has elapsed on `time_source`.
///
/// Blocks the calling context; never yields. Returns immediately for a zero
/// duration.
pub fn block_for<I, T>(time_source: &T, duration: I::Duration)
where
    I: TimeInstant,
    T: TimeSource<I>,
{
    let start = time_source.now();
    while time_source.now().duration_since(start) < duration {
        core::hint::spin_loop();
    }
}
