//! Start and Reset button tasks
//!
//! One task instance per button. Each waits for a rising edge and hands
//! the event to the controller. Start edges are dropped while the state
//! machine has the Start gate closed; Reset is always delivered.

use defmt::*;
use embassy_rp::gpio::Input;
use portable_atomic::Ordering;

use spinlight_core::state::Event;

use crate::channels::START_ENABLED;
use crate::controller;

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: Input<'static>, event: Event) {
    info!("{} button task started", event);

    loop {
        pin.wait_for_rising_edge().await;

        if event.is_gated() && !START_ENABLED.load(Ordering::Acquire) {
            trace!("{} edge ignored, gate closed", event);
            continue;
        }

        controller::dispatch(event);
    }
}
