//! Selector input trait

use crate::mode::SelectorState;

/// Source of selector readings
///
/// Reads are synchronous and cheap; callers sample the selector each time
/// they need it rather than caching a value.
pub trait SelectorInput {
    type Error;

    /// Read the current selector state
    fn read(&mut self) -> Result<SelectorState, Self::Error>;
}
