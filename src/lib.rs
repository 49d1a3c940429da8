#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Accumulator`**: Interrupt-driven elapsed-time counter and buzzer gate
//! - **`SharedAccumulator`**: Critical-section slot sharing the accumulator between the tick interrupt and the foreground
//! - **`GestureClassifier`**: Debounces the button and classifies each press as `Short` or `Long`
//! - **`Stopwatch`**: The Stopped / Running / Paused controller loop
//! - **`ElapsedTime`**: The `HH:MM:SS.hh` time of record
//! - **`Button`**, **`Buzzer`**, **`TickTimer`**, **`CharacterDisplay`**: Traits to implement for your board
//! - **`TimeSource`**: Trait to implement for your monotonic clock
//!
//! The tick interrupt only does counter arithmetic and toggles the buzzer; the
//! display is rendered from the foreground when the interrupt marks the time
//! dirty.

#[macro_use]
mod fmt;

pub mod accumulator;
pub mod classifier;
pub mod hardware;
pub mod render;
pub mod stopwatch;
pub mod time;
pub mod types;

pub use accumulator::{Accumulator, SharedAccumulator};
pub use classifier::{ButtonDebounceState, ClassifierConfig, GestureClassifier};
pub use hardware::{
    Button, Buzzer, CharacterDisplay, DisplayMode, SUB_TICKS_PER_HUNDREDTH, TICK_PERIOD_US,
    TONE_HUNDREDTHS, TONE_HZ, TickTimer,
};
pub use render::{DisplayWriter, FRAME_CAPACITY, format_frame, render};
pub use stopwatch::Stopwatch;
pub use time::{TimeDuration, TimeInstant, TimeSource, block_for};
pub use types::{AccumulatorError, BuzzerGate, ElapsedTime, GestureVerdict, StopwatchState};
