//! State machine for cycle execution
//!
//! Defines the authoritative runtime behavior of the controller.
//! The state machine is explicit, finite, and deterministic; it is driven
//! only by the Start, Reset and Tick events.

pub mod controller;
pub mod events;
pub mod machine;
pub mod shared;

pub use controller::{CycleController, OutputError};
pub use events::Event;
pub use machine::{CycleMachine, CycleOutputs, CycleState, Transition};
pub use shared::{CycleSnapshot, SharedCycle};
