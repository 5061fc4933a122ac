//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in spinlight-core on top of `embedded-hal` pins and PWM channels:
//!
//! - Selector switches (two level bits, one mode switch)
//! - Indicator lights (four GPIO outputs)
//! - Seven-segment digit bus (seven segment lines, one digit select)
//! - Duty-cycle output (one PWM channel)

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod pwm;
pub mod segment;
pub mod selector;

#[cfg(test)]
mod mock;

pub use indicator::IndicatorPins;
pub use pwm::PwmDuty;
pub use segment::SegmentPins;
pub use selector::SelectorPins;
