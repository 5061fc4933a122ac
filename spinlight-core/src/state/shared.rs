//! Cycle state shared with the display loop
//!
//! The event handlers publish the whole cycle state as one packed word, so
//! the display loop can never see `tick`, `active` and `finished` from two
//! different updates.

use portable_atomic::{AtomicU32, Ordering};

const ACTIVE_BIT: u32 = 1 << 16;
const FINISHED_BIT: u32 = 1 << 17;

/// Read-only copy of the cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleSnapshot {
    /// Ticks elapsed in the current cycle
    pub tick: u16,
    /// A cycle is running
    pub active: bool,
    /// The last cycle ran to completion
    pub finished: bool,
}

impl CycleSnapshot {
    /// Pack into a single word
    pub const fn pack(self) -> u32 {
        let mut raw = self.tick as u32;
        if self.active {
            raw |= ACTIVE_BIT;
        }
        if self.finished {
            raw |= FINISHED_BIT;
        }
        raw
    }

    /// Unpack from a single word
    pub const fn unpack(raw: u32) -> Self {
        Self {
            tick: raw as u16,
            active: raw & ACTIVE_BIT != 0,
            finished: raw & FINISHED_BIT != 0,
        }
    }
}

/// Atomically published cycle state
///
/// Single writer (the event handlers), any number of readers.
#[derive(Debug)]
pub struct SharedCycle {
    raw: AtomicU32,
}

impl Default for SharedCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedCycle {
    /// Create with the idle state
    pub const fn new() -> Self {
        Self {
            raw: AtomicU32::new(0),
        }
    }

    /// Replace the published state
    pub fn publish(&self, snapshot: CycleSnapshot) {
        self.raw.store(snapshot.pack(), Ordering::Release);
    }

    /// Read the latest published state
    pub fn snapshot(&self) -> CycleSnapshot {
        CycleSnapshot::unpack(self.raw.load(Ordering::Acquire))
    }

    /// Shorthand for the display loop
    pub fn is_finished(&self) -> bool {
        self.snapshot().finished
    }
}
