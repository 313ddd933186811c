//! STM32F103 Blue Pill Two-Button PWM Dimmer
//! =============================================================================================
//!
//! Date			Author          Notes
//! 2026-10-17	    YHY             Initial release
//!
//!==============================================================================================
//!
//! This firmware steps an LED through four brightness levels using:
//! - Two push buttons (ON / OFF) polled every 40 ms
//! - A Mealy state machine: dark -> 20% -> 50% -> 100% -> 20% ..., OFF returns to dark
//! - TIM3 channel 1 PWM at 100Hz
//!
//! Hardware Connections:
//!   Buttons -> Blue Pill
//!      ON   -> PB12 (to 3.3V when pressed, internal pull-down)
//!      OFF  -> PB13 (to 3.3V when pressed, internal pull-down)
//!
//!   LED -> Blue Pill
//!      Anode   -> PA6 (TIM3_CH1, through a series resistor)
//!      Cathode -> GND
//!
//! Features:
//! 1. Press detection on the rising edge of each button
//! 2. 40 ms polling period as the only debouncing
//! 3. Brightness state published to a status task over a signal
//! 4. defmt RTT logging with a periodic heartbeat

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_stm32::{
    gpio::{Input, OutputType, Pull},
    peripherals,
    time::Hertz,
    timer::simple_pwm::{PwmPin, SimplePwm, SimplePwmChannel},
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use pwm_brightness::{
    config::{ControllerConfig, PWM_PERIOD, TICK_PERIOD_MS},
    control::{BrightnessController, BrightnessState},
    hardware::{
        gpio_button::{ButtonLines, Polarity},
        pwm_led::PwmLed,
    },
};

type Buttons = ButtonLines<Input<'static>, Input<'static>>;
type Led = PwmLed<SimplePwmChannel<'static, peripherals::TIM3>>;

// Latest brightness state, published by the control task
static STATE_SIGNAL: Signal<ThreadModeRawMutex, BrightnessState> = Signal::new();

/// LED PWM frequency. One period is `PWM_PERIOD` pulse-width units (10 ms).
const PWM_FREQUENCY: Hertz = Hertz(100);

/// Heartbeat interval while nothing changes
const STATUS_INTERVAL: Duration = Duration::from_secs(10);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // HSE 8MHz through the PLL to 72MHz, as on every Blue Pill
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            // External crystal oscillator on the board
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,     // PLL clock source: HSE
            prediv: PllPreDiv::DIV1, // No pre-division
            mul: PllMul::MUL9,       // 8MHz * 9 = 72MHz
        });
        config.rcc.sys = Sysclk::PLL1_P; // System clock from the PLL output
        config.rcc.ahb_pre = AHBPrescaler::DIV1; // AHB prescaler (72MHz)
        config.rcc.apb1_pre = APBPrescaler::DIV2; // APB1 prescaler (36MHz)
        config.rcc.apb2_pre = APBPrescaler::DIV1; // APB2 prescaler (72MHz)
    }
    let p = embassy_stm32::init(config);
    info!("Brightness controller starting");

    let on_button = Input::new(p.PB12, Pull::Down);
    let off_button = Input::new(p.PB13, Pull::Down);
    let buttons = ButtonLines::new(on_button, off_button, Polarity::ActiveHigh);

    let led_pin = PwmPin::new_ch1(p.PA6, OutputType::PushPull);
    let pwm = SimplePwm::new(
        p.TIM3,
        Some(led_pin),
        None,
        None,
        None,
        PWM_FREQUENCY,
        Default::default(),
    );
    let mut channel = pwm.split().ch1;
    channel.set_duty_cycle_fully_off();
    channel.enable();
    let led = PwmLed::new(channel);

    let controller = BrightnessController::new(
        buttons,
        led,
        ControllerConfig::new(TICK_PERIOD_MS, PWM_PERIOD),
    );
    unwrap!(spawner.spawn(brightness_control(controller)));

    loop {
        match select(STATE_SIGNAL.wait(), Timer::after(STATUS_INTERVAL)).await {
            Either::First(state) => info!("Brightness state: {}", state),
            Either::Second(()) => info!("System status: operational"),
        }
    }
}

/// Polls the buttons and drives the LED for the lifetime of the firmware.
#[embassy_executor::task]
async fn brightness_control(mut controller: BrightnessController<Buttons, Led>) {
    let mut delay = Delay;

    loop {
        let report = controller.step(&mut delay).await;
        if report.command.is_some() {
            STATE_SIGNAL.signal(report.state);
        }
    }
}
