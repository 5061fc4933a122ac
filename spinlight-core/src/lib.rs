//! Board-agnostic core logic for the cycle controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Selector classification (water level and cycle mode)
//! - Indicator patterns for each cycle phase
//! - Phase schedules and duty-cycle levels
//! - State machine driven by Start, Reset and Tick events
//! - Two-digit display encoding and multiplexing
//! - Hardware abstraction traits (selector, outputs, trigger gates)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod duty;
pub mod mode;
pub mod pattern;
pub mod schedule;
pub mod state;
pub mod traits;

pub use duty::DutyLevel;
pub use mode::{Mode, SelectorState, WaterLevel};
pub use pattern::IndicatorMask;
pub use schedule::{CycleSchedule, Phase};
