//! Stopwatch controller state machine.
//!
//! Provides [`Stopwatch`], the foreground control loop: it waits for one
//! gesture at a time, moves between Stopped, Running and Paused, arms and
//! disarms the shared accumulator and renders the display.

use crate::accumulator::SharedAccumulator;
use crate::classifier::GestureClassifier;
use crate::hardware::{Button, Buzzer, CharacterDisplay, DisplayMode, TickTimer};
use crate::render::render;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{AccumulatorError, ElapsedTime, GestureVerdict, StopwatchState};

/// Single-button stopwatch controller.
///
/// | State   | On entry                     | Short   | Long    |
/// |---------|------------------------------|---------|---------|
/// | Stopped | disarm, reset time, render   | Running | Running |
/// | Running | arm                          | Paused  | Paused  |
/// | Paused  | disarm, render               | Running | Stopped |
///
/// While waiting for a gesture the controller re-renders whenever the tick
/// interrupt has marked the time dirty, so no display I/O happens in
/// interrupt context.
///
/// # Type Parameters
/// * `'a` - Lifetime of the time source and shared accumulator references
/// * `I` - Time instant type
/// * `B` - Button implementation type
/// * `C` - Time source implementation type
/// * `D` - Character display implementation type
/// * `T` - Tick timer implementation type
/// * `Z` - Buzzer implementation type
pub struct Stopwatch<'a, I, B, C, D, T, Z>
where
    I: TimeInstant,
    B: Button,
    C: TimeSource<I>,
    D: CharacterDisplay,
    T: TickTimer,
    Z: Buzzer,
{
    classifier: GestureClassifier<'a, I, B, C>,
    accumulator: &'a SharedAccumulator<T, Z>,
    display: D,
    state: StopwatchState,
}

impl<'a, I, B, C, D, T, Z> Stopwatch<'a, I, B, C, D, T, Z>
where
    I: TimeInstant,
    B: Button,
    C: TimeSource<I>,
    D: CharacterDisplay,
    T: TickTimer,
    Z: Buzzer,
{
    /// Initializes the display and enters the Stopped state.
    pub fn new(
        classifier: GestureClassifier<'a, I, B, C>,
        accumulator: &'a SharedAccumulator<T, Z>,
        mut display: D,
    ) -> Self {
        display.init(DisplayMode::On);
        display.clear();

        let mut stopwatch = Self {
            classifier,
            accumulator,
            display,
            state: StopwatchState::INITIAL,
        };
        stopwatch.enter(StopwatchState::INITIAL);
        stopwatch
    }

    /// Returns the current state.
    pub fn state(&self) -> StopwatchState {
        self.state
    }

    /// Returns a snapshot of the time of record.
    ///
    /// Zero if the accumulator slot is empty.
    pub fn elapsed(&self) -> ElapsedTime {
        self.accumulator
            .lock(|acc| acc.time())
            .unwrap_or(ElapsedTime::ZERO)
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Waits for one gesture, applies the resulting transition and returns
    /// the new state.
    pub fn step(&mut self) -> StopwatchState {
        let Self {
            classifier,
            accumulator,
            display,
            state,
        } = self;
        let label = *state;

        let verdict = classifier.classify_with(|| {
            if let Ok(Some(time)) = accumulator.lock(|acc| acc.take_dirty()) {
                render(display, label, &time);
            }
        });

        self.apply(verdict)
    }

    /// Applies a gesture verdict without waiting for the button.
    pub fn apply(&mut self, verdict: GestureVerdict) -> StopwatchState {
        let next = self.state.next(verdict);
        info!("{:?} --{:?}--> {:?}", self.state, verdict, next);
        self.enter(next);
        next
    }

    /// Runs the control loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    fn enter(&mut self, state: StopwatchState) {
        self.state = state;

        let entered = self.accumulator.lock(
            |acc| -> Result<Option<ElapsedTime>, AccumulatorError> {
                match state {
                    StopwatchState::Stopped => {
                        acc.disarm();
                        acc.reset()?;
                    }
                    StopwatchState::Running => acc.arm(),
                    StopwatchState::Paused => acc.disarm(),
                }

                if state.is_armed() {
                    // First tick renders
                    return Ok(None);
                }
                acc.take_dirty();
                Ok(Some(acc.time()))
            },
        );

        match entered.and_then(|result| result) {
            Ok(Some(time)) => render(&mut self.display, state, &time),
            Ok(None) => {}
            Err(e) => warn!("entering {:?} failed: {:?}", state, e),
        }
    }
}
