//! Selector switch inputs
//!
//! Three switch lines: two water-level bits and the extended-mode switch.

use embedded_hal::digital::InputPin;
use spinlight_core::traits::SelectorInput;
use spinlight_core::{SelectorState, WaterLevel};

/// Selector read from three GPIO inputs
///
/// Switches wired to ground with pull-ups read as active-low; the
/// `active_low` flag inverts every line so a closed switch reads as 1.
pub struct SelectorPins<P> {
    level: [P; 2],
    extended: P,
    active_low: bool,
}

impl<P: InputPin> SelectorPins<P> {
    /// Create a selector from level bit 0, level bit 1 and the mode switch
    pub fn new(level: [P; 2], extended: P, active_low: bool) -> Self {
        Self {
            level,
            extended,
            active_low,
        }
    }

    /// Selector with switches pulling the line high when closed
    pub fn new_active_high(level: [P; 2], extended: P) -> Self {
        Self::new(level, extended, false)
    }

    /// Selector with switches pulling the line low when closed
    pub fn new_active_low(level: [P; 2], extended: P) -> Self {
        Self::new(level, extended, true)
    }

    fn sample(active_low: bool, pin: &mut P) -> Result<bool, P::Error> {
        Ok(pin.is_high()? != active_low)
    }
}

impl<P: InputPin> SelectorInput for SelectorPins<P> {
    type Error = P::Error;

    fn read(&mut self) -> Result<SelectorState, Self::Error> {
        let [bit0, bit1] = &mut self.level;
        let bit0 = Self::sample(self.active_low, bit0)?;
        let bit1 = Self::sample(self.active_low, bit1)?;
        let extended = Self::sample(self.active_low, &mut self.extended)?;

        Ok(SelectorState {
            water_level: WaterLevel::from_bits(bit0, bit1),
            extended_selected: extended,
        })
    }
}
