//! Event source gates
//!
//! The cycle state machine decides when ticks and Start edges are
//! delivered. Reset edges are always delivered and have no gate.

/// Periodic cycle tick source
pub trait TickSource {
    /// Start or stop tick delivery
    ///
    /// Enabling restarts the period so the first tick arrives one full
    /// period later.
    fn set_enabled(&mut self, enabled: bool);
}

/// Start button edge delivery
pub trait StartTrigger {
    /// Allow or block Start edges
    fn set_enabled(&mut self, enabled: bool);
}
