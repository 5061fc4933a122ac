//! Inter-task communication
//!
//! Statics shared between the event handlers and the display task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicBool;

use spinlight_core::state::SharedCycle;

/// Cycle state published after every event, read by the display task
pub static CYCLE_STATUS: SharedCycle = SharedCycle::new();

/// Tick delivery gate (true = deliver ticks, restarting the period)
pub static TICK_GATE: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Start edge gate
pub static START_ENABLED: AtomicBool = AtomicBool::new(true);
