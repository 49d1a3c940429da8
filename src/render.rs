//! Two-line frame rendering for a character display.
//!
//! Line one is the padded state label, line two the elapsed time as
//! `HH:MM:SS.hh`. Formatting is a pure function; [`render`] streams the result
//! to a [`CharacterDisplay`].

use core::fmt::Write;
use heapless::String;

use crate::hardware::CharacterDisplay;
use crate::types::{ElapsedTime, LABEL_WIDTH, StopwatchState};

/// Capacity of a formatted frame: label, three-digit hours and two newlines.
pub const FRAME_CAPACITY: usize = LABEL_WIDTH + 1 + 12 + 1;

/// Formats one frame as `"<label>\n<HH:MM:SS.hh>\n"`.
pub fn format_frame(state: StopwatchState, time: &ElapsedTime) -> String<FRAME_CAPACITY> {
    let mut frame = String::new();
    // Cannot overflow: both lines are bounded by FRAME_CAPACITY.
    let _ = write!(frame, "{}\n{}\n", state.label(), time);
    frame
}

/// Writes one frame to `display`.
pub fn render<D: CharacterDisplay>(display: &mut D, state: StopwatchState, time: &ElapsedTime) {
    let frame = format_frame(state, time);
    let _ = DisplayWriter(display).write_str(&frame);
}

/// `core::fmt::Write` adaptor streaming characters to a display.
pub struct DisplayWriter<'d, D: CharacterDisplay>(pub &'d mut D);

impl<D: CharacterDisplay> Write for DisplayWriter<'_, D> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            self.0.put_char(c);
        }
        Ok(())
    }
}
