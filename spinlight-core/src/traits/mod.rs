//! Hardware abstraction traits
//!
//! These traits define the interface between the cycle logic and the
//! board: selector inputs, the three outputs, and the two trigger gates
//! the state machine opens and closes.

pub mod input;
pub mod output;
pub mod trigger;

pub use input::SelectorInput;
pub use output::{DigitOutput, DutyCycleOutput, IndicatorOutput};
pub use trigger::{StartTrigger, TickSource};
