//! Spinlight - Wash / Rinse / Spin Cycle Controller Firmware
//!
//! Main firmware binary for RP2040-based controller boards.
//!
//! Pin assignments (Raspberry Pi Pico):
//! - GPIO2, GPIO3: water level selector bits 0 and 1
//! - GPIO4: extended cycle switch
//! - GPIO10-GPIO13: indicator lights 0-3
//! - GPIO14: Start button
//! - GPIO15: Reset button
//! - GPIO16: duty-cycle output (PWM slice 0, channel A)
//! - GPIO18-GPIO22, GPIO26, GPIO27: display segments `a`-`g`
//! - GPIO28: display digit select (high = left digit)

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use {defmt_rtt as _, panic_probe as _};

use spinlight_core::state::Event;
use spinlight_drivers::{IndicatorPins, PwmDuty, SegmentPins, SelectorPins};

use crate::config::{CycleTimingConfig, DutyPwmConfig};

mod channels;
mod config;
mod controller;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Spinlight firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Selector switches close to 3V3
    let selector = SelectorPins::new_active_high(
        [Input::new(p.PIN_2, Pull::Down), Input::new(p.PIN_3, Pull::Down)],
        Input::new(p.PIN_4, Pull::Down),
    );

    let lights = infallible(IndicatorPins::new([
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ]));

    let segments = infallible(SegmentPins::new(
        [
            Output::new(p.PIN_18, Level::Low),
            Output::new(p.PIN_19, Level::Low),
            Output::new(p.PIN_20, Level::Low),
            Output::new(p.PIN_21, Level::Low),
            Output::new(p.PIN_22, Level::Low),
            Output::new(p.PIN_26, Level::Low),
            Output::new(p.PIN_27, Level::Low),
        ],
        Output::new(p.PIN_28, Level::Low),
    ));

    let pwm_config = DutyPwmConfig::default();
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config.pwm_config());
    let (channel, _) = pwm.split();
    let Some(channel) = channel else {
        panic!("PWM channel A unavailable");
    };
    let duty = match PwmDuty::new(channel, pwm_config.inverted) {
        Ok(duty) => duty,
        Err(_) => panic!("PWM output rejected the off level"),
    };
    info!(
        "Duty output ready (top={}, inverted={})",
        pwm_config.top, pwm_config.inverted
    );

    controller::install(controller::board(duty, lights), selector);

    let timing = CycleTimingConfig::default();

    // Spawn tasks
    spawner.spawn(tasks::tick_task(timing)).unwrap();
    spawner.spawn(tasks::display_task(segments, timing)).unwrap();
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_14, Pull::Down), Event::Start))
        .unwrap();
    spawner
        .spawn(tasks::button_task(Input::new(p.PIN_15, Pull::Down), Event::Reset))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Unwrap a result from an RP2040 GPIO operation, which cannot fail
fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => match e {},
    }
}
