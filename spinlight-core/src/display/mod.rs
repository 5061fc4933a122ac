//! Two-digit seven-segment display
//!
//! The right digit shows the water level selection, the left digit the
//! cycle mode. After a completed cycle both digits show a ring until the
//! next start or reset.

pub mod mux;
pub mod segment;

pub use mux::DisplayMultiplexer;
pub use segment::{encode, DigitFrame, DigitSelect, SegmentMask};
