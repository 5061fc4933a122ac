//! Indicator light outputs

use embedded_hal::digital::{OutputPin, PinState};
use spinlight_core::pattern::IndicatorMask;
use spinlight_core::traits::IndicatorOutput;

/// Four indicator lights on GPIO outputs
///
/// Light `n` follows bit `n` of the mask. All lights start off.
pub struct IndicatorPins<P> {
    pins: [P; 4],
    mask: IndicatorMask,
}

impl<P: OutputPin> IndicatorPins<P> {
    /// Take ownership of the pins and switch every light off
    pub fn new(pins: [P; 4]) -> Result<Self, P::Error> {
        let mut lights = Self {
            pins,
            mask: IndicatorMask::OFF,
        };
        lights.write(IndicatorMask::OFF)?;
        Ok(lights)
    }

    /// Mask last written
    pub fn mask(&self) -> IndicatorMask {
        self.mask
    }

    fn write(&mut self, mask: IndicatorMask) -> Result<(), P::Error> {
        for (light, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(PinState::from(mask.is_lit(light as u8)))?;
        }
        self.mask = mask;
        Ok(())
    }
}

impl<P: OutputPin> IndicatorOutput for IndicatorPins<P> {
    type Error = P::Error;

    fn set_mask(&mut self, mask: IndicatorMask) -> Result<(), Self::Error> {
        self.write(mask)
    }
}
