use core::fmt::Write;

use button_stopwatch::{Button, Buzzer, CharacterDisplay, DisplayMode, TickTimer, TICK_PERIOD_US};
use embedded_hal::digital::v2::InputPin;
use embedded_hal::timer::CountDown;
use embedded_hal::PwmPin;
use heapless::String;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    pac::TIM2,
    time::Hertz,
    timers::{Event, Timer},
};

/// Active-low push-button with the pull-up configured by board setup
pub struct ActiveLowButton<P: InputPin>(P);

impl<P: InputPin> ActiveLowButton<P> {
    pub fn new(pin: P) -> Self {
        Self(pin)
    }
}

impl<P: InputPin> Button for ActiveLowButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.0.is_low().unwrap_or(false)
    }
}

/// Piezo buzzer driven by a PWM channel running at the tone frequency
///
/// The duty cycle is fixed at 50%; switching the channel on and off gates the
/// square wave.
pub struct PwmBuzzer<P: PwmPin<Duty = u16>> {
    channel: P,
}

impl<P: PwmPin<Duty = u16>> PwmBuzzer<P> {
    pub fn new(mut channel: P) -> Self {
        let half = channel.get_max_duty() / 2;
        channel.set_duty(half);
        channel.disable();
        Self { channel }
    }
}

impl<P: PwmPin<Duty = u16>> Buzzer for PwmBuzzer<P> {
    fn tone_on(&mut self) {
        self.channel.enable();
    }

    fn tone_off(&mut self) {
        self.channel.disable();
    }
}

/// TIM2 update interrupt as the stopwatch tick source
pub struct Tim2Ticker {
    timer: Timer<TIM2>,
}

impl Tim2Ticker {
    /// Tick rate derived from the tick period
    pub const RATE: Hertz = Hertz(1_000_000 / TICK_PERIOD_US);

    pub fn new(timer: Timer<TIM2>) -> Self {
        Self { timer }
    }
}

impl TickTimer for Tim2Ticker {
    fn start(&mut self) {
        // Restarting the countdown zeroes the counter
        self.timer.start(Self::RATE);
        self.timer.listen(Event::TimeOut);
    }

    fn stop(&mut self) {
        self.timer.unlisten(Event::TimeOut);
    }

    fn acknowledge(&mut self) {
        // Clears the update flag; auto-reload re-arms the next period
        let _ = self.timer.wait();
    }
}

/// Two-line character display mirrored to RTT
///
/// Each completed line is printed on its own; `clear` prints a separator.
pub struct RttDisplay {
    line: String<24>,
}

impl RttDisplay {
    pub fn new() -> Self {
        Self { line: String::new() }
    }
}

impl CharacterDisplay for RttDisplay {
    fn init(&mut self, mode: DisplayMode) {
        rprintln!("display init: {:?}", mode);
        self.line.clear();
    }

    fn clear(&mut self) {
        rprintln!("----------------");
        self.line.clear();
    }

    fn put_char(&mut self, c: char) {
        if c == '\n' {
            rprintln!("{}", self.line.as_str());
            self.line.clear();
        } else {
            // Overlong lines are truncated like on a 16-column LCD
            let _ = self.line.write_char(c);
        }
    }
}
