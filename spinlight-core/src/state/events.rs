//! Events that drive the cycle state machine

/// Events delivered to the cycle state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Rising edge on the Start button
    Start,
    /// Rising edge on the Reset button
    Reset,
    /// Periodic cycle tick
    Tick,
}

impl Event {
    /// Check if this event can be blocked by a trigger gate
    ///
    /// Reset is never gated so a cycle can always be aborted.
    pub fn is_gated(&self) -> bool {
        !matches!(self, Event::Reset)
    }
}
