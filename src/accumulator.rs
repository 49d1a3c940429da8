//! Interrupt-driven elapsed-time accumulator.
//!
//! [`Accumulator`] owns the time of record, the buzzer gate and the tick
//! timer. The board's timer interrupt calls [`Accumulator::on_tick`] once per
//! period; the foreground arms, disarms, resets and snapshots it. Both sides
//! reach it through [`SharedAccumulator`], which masks interrupts for the
//! duration of every access.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::hardware::{Buzzer, SUB_TICKS_PER_HUNDREDTH, TONE_HUNDREDTHS, TickTimer};
use crate::types::{AccumulatorError, BuzzerGate, ElapsedTime};

/// Elapsed-time accumulator driven by a periodic timer interrupt.
///
/// Time advances only while armed. The buzzer gate is a pure function of the
/// armed flag and the hundredths counter: on for hundredths `0..10` of every
/// second while armed, off otherwise. Deriving it from the counter keeps the
/// tone locked to the displayed time.
///
/// # Type Parameters
/// * `T` - Tick timer implementation type
/// * `Z` - Buzzer implementation type
pub struct Accumulator<T: TickTimer, Z: Buzzer> {
    timer: T,
    buzzer: Z,
    time: ElapsedTime,
    phase: u8,
    armed: bool,
    gate: BuzzerGate,
    dirty: bool,
}

impl<T: TickTimer, Z: Buzzer> Accumulator<T, Z> {
    /// Creates a disarmed accumulator at zero with the timer stopped and the
    /// buzzer silent.
    pub fn new(mut timer: T, mut buzzer: Z) -> Self {
        timer.stop();
        buzzer.tone_off();

        Self {
            timer,
            buzzer,
            time: ElapsedTime::ZERO,
            phase: 0,
            armed: false,
            gate: BuzzerGate::Off,
            dirty: false,
        }
    }

    /// Starts accumulating.
    ///
    /// Resets the sub-tick phase and restarts the timer; the time of record is
    /// left untouched so a paused run resumes where it stopped.
    pub fn arm(&mut self) {
        self.phase = 0;
        self.armed = true;
        self.timer.start();
        self.apply_gate();
    }

    /// Stops accumulating and silences the buzzer.
    ///
    /// The time of record freezes. Calling this while already disarmed does
    /// nothing.
    pub fn disarm(&mut self) {
        if !self.armed {
            return;
        }

        self.timer.stop();
        self.armed = false;
        self.apply_gate();
    }

    /// Zeroes the time of record.
    ///
    /// # Returns
    /// * `Err(AccumulatorError::Armed)` - Called while armed; nothing changed
    pub fn reset(&mut self) -> Result<(), AccumulatorError> {
        if self.armed {
            return Err(AccumulatorError::Armed);
        }

        self.time = ElapsedTime::ZERO;
        self.phase = 0;
        self.dirty = true;
        Ok(())
    }

    /// Periodic timer callback. Call exactly once per timer interrupt.
    ///
    /// Every [`SUB_TICKS_PER_HUNDREDTH`] calls advance the time of record by
    /// one hundredth, carrying hundredths into seconds, minutes and hours in
    /// that order. The buzzer turns off when hundredths reach
    /// [`TONE_HUNDREDTHS`] and back on when a new second begins. Each armed
    /// call marks the snapshot dirty for the foreground renderer.
    ///
    /// A firing that was already pending when the accumulator was disarmed is
    /// acknowledged and otherwise ignored.
    pub fn on_tick(&mut self) {
        self.timer.acknowledge();

        if !self.armed {
            return;
        }

        self.phase += 1;
        if self.phase >= SUB_TICKS_PER_HUNDREDTH {
            self.phase = 0;
            self.time.advance_hundredth();
            self.apply_gate();
        }

        self.dirty = true;
    }

    /// Returns a copy of the time of record.
    pub fn time(&self) -> ElapsedTime {
        self.time
    }

    /// Returns true while armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns the current buzzer gate.
    pub fn buzzer_gate(&self) -> BuzzerGate {
        self.gate
    }

    /// Returns the time of record if it changed since the last call.
    pub fn take_dirty(&mut self) -> Option<ElapsedTime> {
        if core::mem::take(&mut self.dirty) {
            Some(self.time)
        } else {
            None
        }
    }

    /// Returns a reference to the tick timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Returns a reference to the buzzer.
    pub fn buzzer(&self) -> &Z {
        &self.buzzer
    }

    fn apply_gate(&mut self) {
        let gate = if self.armed && self.time.hundredths < TONE_HUNDREDTHS {
            BuzzerGate::On
        } else {
            BuzzerGate::Off
        };

        if gate == self.gate {
            return;
        }

        match gate {
            BuzzerGate::On => self.buzzer.tone_on(),
            BuzzerGate::Off => self.buzzer.tone_off(),
        }
        self.gate = gate;
    }
}

/// An [`Accumulator`] shared between the timer interrupt and the foreground.
///
/// Every access runs inside a critical section, so the interrupt can never
/// observe or produce a half-updated time of record. The slot starts empty
/// when built with [`SharedAccumulator::empty`], which lets it live in a
/// `static` before the peripherals exist:
///
/// ```ignore
/// static ACCUMULATOR: SharedAccumulator<Tim2Ticker, PwmBuzzer> = SharedAccumulator::empty();
///
/// #[interrupt]
/// fn TIM2() {
///     ACCUMULATOR.on_tick();
/// }
/// ```
pub struct SharedAccumulator<T: TickTimer, Z: Buzzer> {
    inner: Mutex<RefCell<Option<Accumulator<T, Z>>>>,
}

impl<T: TickTimer, Z: Buzzer> SharedAccumulator<T, Z> {
    /// Creates an empty slot. Install an accumulator before use.
    pub const fn empty() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Creates a slot holding `accumulator`.
    pub fn new(accumulator: Accumulator<T, Z>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Some(accumulator))),
        }
    }

    /// Places `accumulator` in the slot, replacing any previous one.
    pub fn install(&self, accumulator: Accumulator<T, Z>) {
        critical_section::with(|cs| {
            *self.inner.borrow(cs).borrow_mut() = Some(accumulator);
        });
    }

    /// Runs `f` with exclusive access to the accumulator, interrupts masked.
    ///
    /// Must not be nested.
    ///
    /// # Returns
    /// * `Err(AccumulatorError::NotInstalled)` - The slot is empty
    pub fn lock<R>(
        &self,
        f: impl FnOnce(&mut Accumulator<T, Z>) -> R,
    ) -> Result<R, AccumulatorError> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            slot.as_mut().map(f).ok_or(AccumulatorError::NotInstalled)
        })
    }

    /// Interrupt entry point: forwards one timer firing to the accumulator.
    ///
    /// A firing before installation is dropped.
    pub fn on_tick(&self) {
        let _ = self.lock(|acc| acc.on_tick());
    }
}
