//! Cycle tick task
//!
//! Delivers Tick events every tick period while the state machine holds
//! the tick gate open. Opening the gate restarts the period, so the first
//! tick of a cycle arrives one full period after Start.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::Ticker;

use spinlight_core::state::Event;

use crate::channels::TICK_GATE;
use crate::config::CycleTimingConfig;
use crate::controller;

#[embassy_executor::task]
pub async fn tick_task(config: CycleTimingConfig) {
    info!("Tick task started");

    let period = config.tick_period();

    loop {
        // Idle until a cycle opens the gate
        while !TICK_GATE.wait().await {}
        debug!("Ticks enabled");

        let mut ticker = Ticker::every(period);
        loop {
            match select(ticker.next(), TICK_GATE.wait()).await {
                Either::First(()) => controller::dispatch(Event::Tick),
                Either::Second(true) => ticker.reset(),
                Either::Second(false) => break,
            }
        }
        debug!("Ticks disabled");
    }
}
