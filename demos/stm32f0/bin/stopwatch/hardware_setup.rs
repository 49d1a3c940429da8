use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Floating, Input, PullUp, gpioa, gpioc},
    pac,
    prelude::*,
    pwm,
    time::Hertz,
    timers::Timer,
};

use button_stopwatch::TONE_HZ;
use stm32f0_demos::peripherals::{ActiveLowButton, PwmBuzzer, RttDisplay, Tim2Ticker};

/// User button on PC13, active low
pub type UserButton = ActiveLowButton<gpioc::PC13<Input<PullUp>>>;

/// Piezo on PA6 (TIM3_CH1)
pub type Piezo = PwmBuzzer<pwm::PwmChannels<pac::TIM3, pwm::C1>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub button: UserButton,
    pub buzzer: Piezo,
    pub ticker: Tim2Ticker,
    pub display: RttDisplay,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - SysTick timer setup (1ms interrupts)
/// - Button on PC13
/// - Buzzer PWM on TIM3 at the tone frequency
/// - TIM2 as the stopwatch tick, with its interrupt unmasked
pub fn init_hardware() -> HardwareContext {
    let (Some(mut dp), Some(mut cp)) = (pac::Peripherals::take(), cortex_m::Peripherals::take())
    else {
        panic!("peripherals already taken");
    };

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let button = setup_button(gpioc.pc13);
    let buzzer = setup_buzzer(gpioa.pa6, dp.TIM3, &mut rcc);
    let ticker = setup_ticker(dp.TIM2, &mut rcc);

    HardwareContext {
        button,
        buzzer,
        ticker,
        display: RttDisplay::new(),
    }
}

/// Configure the system clock to run at maximum speed
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure SysTick timer for 1ms interrupts
///
/// Drives the millisecond clock used for debounce and long-press timing.
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure user button (PC13) with pull-up
fn setup_button(pc13: gpioc::PC13<Input<Floating>>) -> UserButton {
    let pin = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    rprintln!("Button configured on PC13");
    ActiveLowButton::new(pin)
}

/// Configure the buzzer PWM on PA6 using TIM3
///
/// The channel starts disabled; the accumulator gates it.
fn setup_buzzer(
    pa6: gpioa::PA6<Input<Floating>>,
    tim3: pac::TIM3,
    rcc: &mut stm32f0xx_hal::rcc::Rcc,
) -> Piezo {
    let pin = cortex_m::interrupt::free(|cs| pa6.into_alternate_af1(cs));
    let channel = pwm::tim3(tim3, pin, rcc, Hertz(TONE_HZ));

    rprintln!("Buzzer configured on TIM3 (PA6) at {} Hz", TONE_HZ);
    PwmBuzzer::new(channel)
}

/// Configure TIM2 as the stopwatch tick
///
/// The timer is not listening until the accumulator arms it.
fn setup_ticker(tim2: pac::TIM2, rcc: &mut stm32f0xx_hal::rcc::Rcc) -> Tim2Ticker {
    let timer = Timer::tim2(tim2, Tim2Ticker::RATE, rcc);

    // SAFETY: the TIM2 handler only touches the critical-section guarded accumulator
    unsafe { cortex_m::peripheral::NVIC::unmask(pac::Interrupt::TIM2) };

    rprintln!("TIM2 configured for {} Hz ticks", Tim2Ticker::RATE.0);
    Tim2Ticker::new(timer)
}
