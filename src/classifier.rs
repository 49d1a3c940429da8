//! Debounced short/long press classification for a single button.

use crate::hardware::Button;
use crate::time::{TimeDuration, TimeInstant, TimeSource, block_for};
use crate::types::GestureVerdict;

/// Timing parameters for [`GestureClassifier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig<D: TimeDuration> {
    /// Contact-bounce settle interval applied after the press and after the
    /// release edge.
    pub settle: D,

    /// Hold time from press detection at which a gesture becomes Long.
    pub long_press: D,
}

impl<D: TimeDuration> ClassifierConfig<D> {
    /// Default settle interval in milliseconds.
    pub const DEFAULT_SETTLE_MS: u64 = 50;

    /// Default long-press threshold in milliseconds.
    pub const DEFAULT_LONG_PRESS_MS: u64 = 1_000;

    /// Creates a configuration.
    pub fn new(settle: D, long_press: D) -> Self {
        Self { settle, long_press }
    }
}

impl<D: TimeDuration> Default for ClassifierConfig<D> {
    fn default() -> Self {
        Self::new(
            D::from_millis(Self::DEFAULT_SETTLE_MS),
            D::from_millis(Self::DEFAULT_LONG_PRESS_MS),
        )
    }
}

/// Internal state of one [`GestureClassifier::classify`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonDebounceState {
    /// Polling for the line to assert.
    ReadyForPress,
    /// Ignoring contact bounce after the press edge.
    DebouncingPress,
    /// Held; the long-press threshold has not elapsed yet.
    WaitingForRelease,
    /// Held past the threshold; waiting for release.
    WaitingForLongRelease,
    /// Ignoring contact bounce after the release edge.
    DebouncingRelease,
}

/// Blocks until one press-and-release gesture completes and classifies it.
///
/// Each call starts from [`ButtonDebounceState::ReadyForPress`], so calls are
/// independent of one another. Settle intervals and the long-press threshold
/// are measured on the monotonic time source.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `B` - Button implementation type
/// * `T` - Time source implementation type
pub struct GestureClassifier<'t, I: TimeInstant, B: Button, T: TimeSource<I>> {
    button: B,
    time_source: &'t T,
    config: ClassifierConfig<I::Duration>,
}

impl<'t, I: TimeInstant, B: Button, T: TimeSource<I>> GestureClassifier<'t, I, B, T> {
    /// Creates a classifier with the default timing.
    pub fn new(button: B, time_source: &'t T) -> Self {
        Self::with_config(button, time_source, ClassifierConfig::default())
    }

    /// Creates a classifier with explicit timing.
    pub fn with_config(
        button: B,
        time_source: &'t T,
        config: ClassifierConfig<I::Duration>,
    ) -> Self {
        Self {
            button,
            time_source,
            config,
        }
    }

    /// Returns the timing configuration.
    pub fn config(&self) -> &ClassifierConfig<I::Duration> {
        &self.config
    }

    /// Blocks until one gesture completes and returns its verdict.
    pub fn classify(&mut self) -> GestureVerdict {
        self.classify_with(|| {})
    }

    /// Like [`classify`](Self::classify), calling `on_poll` once per polling
    /// iteration so the caller can do short foreground work (such as
    /// refreshing the display) while the button is idle or held.
    ///
    /// `on_poll` is not called during the settle intervals.
    pub fn classify_with(&mut self, mut on_poll: impl FnMut()) -> GestureVerdict {
        let mut state = ButtonDebounceState::ReadyForPress;
        let mut verdict = GestureVerdict::Short;
        let mut pressed_at = self.time_source.now();

        loop {
            on_poll();

            match state {
                ButtonDebounceState::ReadyForPress => {
                    if self.button.is_pressed() {
                        pressed_at = self.time_source.now();
                        state = ButtonDebounceState::DebouncingPress;
                    }
                }
                ButtonDebounceState::DebouncingPress => {
                    block_for::<I, T>(self.time_source, self.config.settle);
                    state = ButtonDebounceState::WaitingForRelease;
                }
                ButtonDebounceState::WaitingForRelease => {
                    if !self.button.is_pressed() {
                        state = ButtonDebounceState::DebouncingRelease;
                    } else if self.time_source.now().duration_since(pressed_at)
                        >= self.config.long_press
                    {
                        state = ButtonDebounceState::WaitingForLongRelease;
                    }
                }
                ButtonDebounceState::WaitingForLongRelease => {
                    if !self.button.is_pressed() {
                        verdict = GestureVerdict::Long;
                        state = ButtonDebounceState::DebouncingRelease;
                    }
                }
                ButtonDebounceState::DebouncingRelease => {
                    block_for::<I, T>(self.time_source, self.config.settle);
                    debug!("gesture classified as {:?}", verdict);
                    return verdict;
                }
            }
        }
    }
}
