//! Display refresh task
//!
//! Drives one digit per refresh period. Reads the selector and the
//! published cycle snapshot but never touches the state machine.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Ticker;

use spinlight_core::display::DisplayMultiplexer;
use spinlight_drivers::SegmentPins;

use crate::channels::CYCLE_STATUS;
use crate::config::CycleTimingConfig;
use crate::controller;

#[embassy_executor::task]
pub async fn display_task(mut bus: SegmentPins<Output<'static>>, config: CycleTimingConfig) {
    info!("Display task started");

    let mut mux = DisplayMultiplexer::new();
    let mut ticker = Ticker::every(config.digit_refresh());

    loop {
        let selector = controller::read_selector();
        let finished = CYCLE_STATUS.is_finished();

        if let Err(e) = mux.refresh(selector, finished, &mut bus) {
            match e {}
        }

        ticker.next().await;
    }
}
