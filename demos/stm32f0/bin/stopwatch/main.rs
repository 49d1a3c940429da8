#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::interrupt;

use button_stopwatch::{Accumulator, GestureClassifier, SharedAccumulator, Stopwatch};
use stm32f0_demos::peripherals::Tim2Ticker;
use stm32f0_demos::time_source::HalTimeSource;

mod hardware_setup;

use hardware_setup::Piezo;

/// Elapsed time and buzzer gate, shared with the TIM2 handler
static ACCUMULATOR: SharedAccumulator<Tim2Ticker, Piezo> = SharedAccumulator::empty();

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::time_source::tick();
}

/// TIM2 interrupt handler - called every tick period while running
#[interrupt]
fn TIM2() {
    ACCUMULATOR.on_tick();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Button Stopwatch ===");
    rprintln!("Starting initialization...");

    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    ACCUMULATOR.install(Accumulator::new(hw.ticker, hw.buzzer));

    let time_source = HalTimeSource::new();
    let classifier = GestureClassifier::new(hw.button, &time_source);
    let mut stopwatch = Stopwatch::new(classifier, &ACCUMULATOR, hw.display);

    rprintln!("=== System Ready ===");
    rprintln!("  short press: start / pause / resume");
    rprintln!("  long press while paused: stop and clear");

    stopwatch.run()
}
