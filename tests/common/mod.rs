//! Shared test infrastructure for button-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};

use button_stopwatch::{
    Button, Buzzer, CharacterDisplay, DisplayMode, TickTimer, TimeDuration, TimeInstant,
    TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source that advances by one millisecond on every read, standing
/// in for the latency of one polling iteration
pub struct MockTimeSource {
    current_time: Cell<u64>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(0),
        }
    }

    /// Current time without advancing
    pub fn peek(&self) -> u64 {
        self.current_time.get()
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        self.current_time.set(self.current_time.get() + millis);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        let t = self.current_time.get();
        self.current_time.set(t + 1);
        TestInstant(t)
    }
}

// ============================================================================
// Scripted Button
// ============================================================================

/// Timeline of button presses as half-open `[start, end)` millisecond ranges
pub struct ButtonScript<'t> {
    clock: &'t MockTimeSource,
    presses: RefCell<heapless::Vec<(u64, u64), 32>>,
}

impl<'t> ButtonScript<'t> {
    pub fn new(clock: &'t MockTimeSource) -> Self {
        Self {
            clock,
            presses: RefCell::new(heapless::Vec::new()),
        }
    }

    /// Schedule a raw contact interval relative to the current time
    pub fn contact(&self, start_offset: u64, length: u64) {
        let start = self.clock.peek() + start_offset;
        let _ = self.presses.borrow_mut().push((start, start + length));
    }

    /// Schedule a clean press 10ms from now, held for `hold` milliseconds
    pub fn press_for(&self, hold: u64) {
        self.contact(10, hold);
    }

    fn is_down_at(&self, t: u64) -> bool {
        self.presses
            .borrow()
            .iter()
            .any(|&(start, end)| t >= start && t < end)
    }

    pub fn button(&self) -> ScriptedButton<'_, 't> {
        ScriptedButton {
            script: self,
            polls: 0,
        }
    }
}

/// Button that replays a [`ButtonScript`]; every poll costs one millisecond
pub struct ScriptedButton<'s, 't> {
    script: &'s ButtonScript<'t>,
    pub polls: u32,
}

impl Button for ScriptedButton<'_, '_> {
    fn is_pressed(&mut self) -> bool {
        self.polls += 1;
        let t = self.script.clock.now().0;
        self.script.is_down_at(t)
    }
}

// ============================================================================
// Mock Peripherals
// ============================================================================

/// Mock tick timer that records its control calls
#[derive(Default)]
pub struct MockTimer {
    pub running: bool,
    pub starts: u32,
    pub stops: u32,
    pub acks: u32,
}

impl TickTimer for MockTimer {
    fn start(&mut self) {
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.running = false;
        self.stops += 1;
    }

    fn acknowledge(&mut self) {
        self.acks += 1;
    }
}

/// Mock buzzer that counts tone switches
#[derive(Default)]
pub struct MockBuzzer {
    pub on: bool,
    pub ons: u32,
    pub offs: u32,
}

impl Buzzer for MockBuzzer {
    fn tone_on(&mut self) {
        self.on = true;
        self.ons += 1;
    }

    fn tone_off(&mut self) {
        self.on = false;
        self.offs += 1;
    }
}

/// Mock character display that records everything written to it
#[derive(Default)]
pub struct MockDisplay {
    pub mode: Option<DisplayMode>,
    pub clears: u32,
    pub text: String,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered `(label, time)` pair
    pub fn last_frame(&self) -> Option<(&str, &str)> {
        let body = self.text.strip_suffix('\n')?;
        let mut lines = body.rsplit('\n');
        let time = lines.next()?;
        let label = lines.next()?;
        Some((label, time))
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> usize {
        self.text.matches('\n').count() / 2
    }
}

impl CharacterDisplay for MockDisplay {
    fn init(&mut self, mode: DisplayMode) {
        self.mode = Some(mode);
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.text.clear();
    }

    fn put_char(&mut self, c: char) {
        self.text.push(c);
    }
}
