//! Hardware abstraction traits and the fixed timing constants of the board.
//!
//! The library never touches registers. Implement these traits for your
//! board's peripherals and hand them to the [`Accumulator`](crate::Accumulator),
//! [`GestureClassifier`](crate::GestureClassifier) and
//! [`Stopwatch`](crate::Stopwatch).

/// Period of the tick interrupt in microseconds.
pub const TICK_PERIOD_US: u32 = 5_000;

/// Tick interrupts per hundredth of a second.
pub const SUB_TICKS_PER_HUNDREDTH: u8 = 2;

/// Length of the per-second tone, in hundredths.
pub const TONE_HUNDREDTHS: u8 = 10;

/// Buzzer tone frequency in hertz.
pub const TONE_HZ: u32 = 1_000;

/// Trait for abstracting the single push-button.
///
/// Implementations translate the electrical level to "asserted": in the
/// reference wiring the line is pulled up and a press reads low. Any pull-up
/// configuration belongs in board setup, not here.
pub trait Button {
    /// Returns true while the button is held down.
    fn is_pressed(&mut self) -> bool;
}

/// Trait for abstracting the piezo tone generator.
///
/// The tone is a hardware square wave switched on and off as a unit; its
/// frequency is fixed at [`TONE_HZ`] by board setup.
pub trait Buzzer {
    /// Starts the tone.
    fn tone_on(&mut self);

    /// Silences the tone.
    fn tone_off(&mut self);
}

/// Trait for abstracting the periodic tick timer.
///
/// The timer fires its interrupt every [`TICK_PERIOD_US`] while started; the
/// interrupt handler forwards each firing to
/// [`Accumulator::on_tick`](crate::Accumulator::on_tick).
pub trait TickTimer {
    /// Restarts the counter from zero and enables the period interrupt.
    fn start(&mut self);

    /// Disables the period interrupt.
    fn stop(&mut self);

    /// Acknowledges the current firing and re-arms the compare for the next
    /// period. Called once per tick from interrupt context.
    fn acknowledge(&mut self);
}

/// Display mode passed to [`CharacterDisplay::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Display off.
    Off,

    /// Display on, cursor hidden.
    On,

    /// Display on with an underline cursor.
    Cursor,

    /// Display on with a blinking cursor.
    CursorBlink,
}

/// Trait for abstracting a character display driver.
///
/// `'\n'` moves to the start of the next line. A driver whose writes can fail
/// must swallow the failure; rendering never reports errors.
pub trait CharacterDisplay {
    /// Initializes the controller in the given mode.
    fn init(&mut self, mode: DisplayMode);

    /// Clears the screen and homes the cursor.
    fn clear(&mut self);

    /// Writes one character at the cursor.
    fn put_char(&mut self, c: char);
}
