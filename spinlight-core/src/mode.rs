//! Selector inputs and mode classification
//!
//! The two selector inputs are a 2-bit water level switch and a single
//! "extended cycle" switch. Level 3 is not a real level: the switch reports
//! it when the selection is out of range, and it blocks every cycle.

/// Water level selector reading (0-3)
///
/// Only the low two bits of the raw reading are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WaterLevel(u8);

impl WaterLevel {
    /// Level reported for an invalid selection
    pub const ERROR: Self = Self(3);

    /// Create a level from a raw switch reading
    pub const fn new(raw: u8) -> Self {
        Self(raw & 0b11)
    }

    /// Create a level from the two selector bits
    pub const fn from_bits(bit0: bool, bit1: bool) -> Self {
        Self((bit0 as u8) | ((bit1 as u8) << 1))
    }

    /// Raw level value (0-3)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if the selector reports the error level
    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }
}

/// Snapshot of the physical selector inputs
///
/// Sampled fresh whenever it is needed; the hardware is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectorState {
    /// Water level switch
    pub water_level: WaterLevel,
    /// Extended cycle switch
    pub extended_selected: bool,
}

impl SelectorState {
    /// Create a selector snapshot
    pub const fn new(water_level: u8, extended_selected: bool) -> Self {
        Self {
            water_level: WaterLevel::new(water_level),
            extended_selected,
        }
    }

    /// Classify this snapshot
    pub const fn mode(&self) -> Mode {
        classify(*self)
    }
}

/// Cycle mode derived from the selector inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Long cycle (128 ticks)
    Extended,
    /// Standard cycle (96 ticks)
    Normal,
    /// Selector error; no cycle may start or advance
    Invalid,
}

impl Mode {
    /// Check if a cycle may run in this mode
    pub const fn is_valid(self) -> bool {
        !matches!(self, Mode::Invalid)
    }
}

/// Classify a selector snapshot
///
/// The error level wins over the extended switch.
pub const fn classify(selector: SelectorState) -> Mode {
    if selector.water_level.is_error() {
        Mode::Invalid
    } else if selector.extended_selected {
        Mode::Extended
    } else {
        Mode::Normal
    }
}
