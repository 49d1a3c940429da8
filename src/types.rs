//! Core value types shared by the accumulator, classifier and controller.

/// Elapsed time of record as a carrying counter chain.
///
/// Each field carries into the next only when it reaches its modulus.
/// Hours have no upper rollover; they wrap at the `u8` width like the
/// hardware counter they model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTime {
    /// Hundredths of a second, 0..=99.
    pub hundredths: u8,

    /// Seconds, 0..=59.
    pub seconds: u8,

    /// Minutes, 0..=59.
    pub minutes: u8,

    /// Hours, 0..=255.
    pub hours: u8,
}

impl ElapsedTime {
    /// Zero elapsed time.
    pub const ZERO: Self = Self {
        hundredths: 0,
        seconds: 0,
        minutes: 0,
        hours: 0,
    };

    /// Creates an elapsed time from its fields.
    ///
    /// Fields are taken as given; callers are responsible for keeping them
    /// within their moduli.
    pub const fn new(hours: u8, minutes: u8, seconds: u8, hundredths: u8) -> Self {
        Self {
            hundredths,
            seconds,
            minutes,
            hours,
        }
    }

    /// Returns true if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Total elapsed time in hundredths of a second.
    pub fn total_hundredths(&self) -> u32 {
        ((self.hours as u32 * 60 + self.minutes as u32) * 60 + self.seconds as u32) * 100
            + self.hundredths as u32
    }

    /// Advances by one hundredth, applying the carry chain.
    ///
    /// Returns true when the hundredths rolled over into a new second.
    pub(crate) fn advance_hundredth(&mut self) -> bool {
        self.hundredths += 1;
        if self.hundredths < 100 {
            return false;
        }

        self.hundredths = 0;
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
            if self.minutes == 60 {
                self.minutes = 0;
                self.hours = self.hours.wrapping_add(1);
            }
        }
        true
    }
}

impl core::fmt::Display for ElapsedTime {
    /// Formats as `HH:MM:SS.hh`; hours use at least two digits.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:02}",
            self.hours, self.minutes, self.seconds, self.hundredths
        )
    }
}

/// Buzzer output enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerGate {
    /// Silent.
    #[default]
    Off,

    /// Emitting the fixed-frequency tone.
    On,
}

/// Result of one completed button gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureVerdict {
    /// Released before the long-press threshold.
    Short,

    /// Held at least the long-press threshold.
    Long,
}

/// The three states of the stopwatch controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchState {
    /// Disarmed with the time of record cleared.
    Stopped,

    /// Armed; elapsed time advances.
    Running,

    /// Disarmed; elapsed time frozen.
    Paused,
}

/// Width all state labels are padded to.
pub const LABEL_WIDTH: usize = 7;

impl StopwatchState {
    /// State the controller starts in.
    pub const INITIAL: Self = StopwatchState::Stopped;

    /// Transition taken when a gesture completes in this state.
    ///
    /// Stopped starts on either verdict, Running pauses on either verdict,
    /// and Paused resumes on Short or stops (clearing the time) on Long.
    pub fn next(self, verdict: GestureVerdict) -> Self {
        match (self, verdict) {
            (StopwatchState::Stopped, _) => StopwatchState::Running,
            (StopwatchState::Running, _) => StopwatchState::Paused,
            (StopwatchState::Paused, GestureVerdict::Short) => StopwatchState::Running,
            (StopwatchState::Paused, GestureVerdict::Long) => StopwatchState::Stopped,
        }
    }

    /// Display label, padded to [`LABEL_WIDTH`] so a shorter label fully
    /// overwrites a longer one on a character display.
    pub fn label(&self) -> &'static str {
        match self {
            StopwatchState::Stopped => "Stopped",
            StopwatchState::Running => "Running",
            StopwatchState::Paused => "Paused ",
        }
    }

    /// Whether the accumulator is armed in this state.
    pub fn is_armed(&self) -> bool {
        *self == StopwatchState::Running
    }
}

/// Errors from accumulator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccumulatorError {
    /// Operation requires the accumulator to be disarmed.
    Armed,

    /// The shared accumulator slot has not been installed yet.
    NotInstalled,
}

impl core::fmt::Display for AccumulatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccumulatorError::Armed => {
                write!(f, "accumulator must be disarmed for this operation")
            }
            AccumulatorError::NotInstalled => {
                write!(f, "accumulator has not been installed")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccumulatorError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn carry_chain_rolls_every_field() {
        let mut t = ElapsedTime::new(0, 59, 59, 99);
        assert!(t.advance_hundredth());
        assert_eq!(t, ElapsedTime::new(1, 0, 0, 0));
    }

    #[test]
    fn hours_wrap_without_panicking() {
        let mut t = ElapsedTime::new(255, 59, 59, 99);
        t.advance_hundredth();
        assert_eq!(t, ElapsedTime::ZERO);
    }

    #[test]
    fn display_pads_fields() {
        assert_eq!(format!("{}", ElapsedTime::new(1, 2, 3, 4)), "01:02:03.04");
        assert_eq!(format!("{}", ElapsedTime::new(123, 0, 0, 0)), "123:00:00.00");
    }

    #[test]
    fn total_hundredths_counts_all_fields() {
        assert_eq!(ElapsedTime::new(1, 1, 1, 1).total_hundredths(), 366_101);
    }

    #[test]
    fn labels_share_one_width() {
        for state in [
            StopwatchState::Stopped,
            StopwatchState::Running,
            StopwatchState::Paused,
        ] {
            assert_eq!(state.label().len(), LABEL_WIDTH);
        }
    }

    #[test]
    fn transition_table() {
        use GestureVerdict::*;
        use StopwatchState::*;

        assert_eq!(Stopped.next(Short), Running);
        assert_eq!(Stopped.next(Long), Running);
        assert_eq!(Running.next(Short), Paused);
        assert_eq!(Running.next(Long), Paused);
        assert_eq!(Paused.next(Short), Running);
        assert_eq!(Paused.next(Long), Stopped);
    }
}
