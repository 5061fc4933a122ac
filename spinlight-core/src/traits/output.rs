//! Output traits
//!
//! The board has three outputs: the duty-cycle controlled cycle output,
//! four indicator lights, and the multiplexed digit bus.

use crate::display::DigitFrame;
use crate::duty::DutyLevel;
use crate::pattern::IndicatorMask;

/// Duty-cycle controlled output (motor, valve)
pub trait DutyCycleOutput {
    type Error;

    /// Drive the output at the given level
    ///
    /// `DutyLevel::Off` must fully disable the output.
    fn set_level(&mut self, level: DutyLevel) -> Result<(), Self::Error>;
}

/// Bank of four indicator lights
pub trait IndicatorOutput {
    type Error;

    /// Set all four lights from a mask
    fn set_mask(&mut self, mask: IndicatorMask) -> Result<(), Self::Error>;
}

/// Multiplexed seven-segment digit bus
pub trait DigitOutput {
    type Error;

    /// Write segments and digit select as one frame
    ///
    /// Implementations must never show a frame's segments on the
    /// other digit, even briefly.
    fn write_frame(&mut self, frame: DigitFrame) -> Result<(), Self::Error>;
}
