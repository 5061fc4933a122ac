//! Embassy async tasks
//!
//! Each task runs independently; the button and tick tasks feed events
//! into the shared controller, the display task only reads.

pub mod buttons;
pub mod display;
pub mod tick;

pub use buttons::button_task;
pub use display::display_task;
pub use tick::tick_task;
