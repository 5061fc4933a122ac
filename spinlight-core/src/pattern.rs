//! Indicator light patterns
//!
//! Each running phase animates the four indicator lights with its own
//! marquee pattern. The patterns are pure functions of the cycle tick, so
//! the light state never needs to be stored between ticks.
//!
//! All three patterns advance the marquee every second tick (`half = tick / 2`)
//! and repeat every 32 ticks: 16 ticks of sweeping, then 16 ticks of all-on
//! or blinking lights.

/// 4-bit indicator light mask (bit 0 = L0 ... bit 3 = L3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorMask(u8);

impl IndicatorMask {
    /// All lights off
    pub const OFF: Self = Self(0);
    /// All lights on
    pub const ALL: Self = Self(0b1111);

    /// Create a mask from raw bits (upper nibble is dropped)
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Mask with a single light on
    pub const fn single(light: u8) -> Self {
        Self::new(1 << (light & 0b11))
    }

    /// Raw 4-bit value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if a given light (0-3) is on
    pub const fn is_lit(self, light: u8) -> bool {
        light < 4 && self.0 & (1 << light) != 0
    }
}

/// Position within the 16-step sweep window
const fn sweep_step(tick: u32) -> u32 {
    (tick / 2) % 16
}

/// Light swept upwards (L0 -> L3)
const fn rising(tick: u32) -> IndicatorMask {
    IndicatorMask::single(((tick / 2) % 4) as u8)
}

/// Light swept downwards (L3 -> L0)
const fn falling(tick: u32) -> IndicatorMask {
    IndicatorMask::single((3 - (tick / 2) % 4) as u8)
}

/// Wash pattern: sweep L0 -> L3 twice, then hold all lights on
pub const fn wash_pattern(tick: u32) -> IndicatorMask {
    if sweep_step(tick) < 8 {
        rising(tick)
    } else {
        IndicatorMask::ALL
    }
}

/// Rinse pattern: sweep L3 -> L0 twice, then a slow blink
///
/// The blink holds each state for two ticks (4-tick period).
pub const fn rinse_pattern(tick: u32) -> IndicatorMask {
    if sweep_step(tick) < 8 {
        falling(tick)
    } else if tick % 4 < 2 {
        IndicatorMask::ALL
    } else {
        IndicatorMask::OFF
    }
}

/// Spin pattern: sweep up once, sweep down once, then a fast blink
///
/// The blink toggles on every tick.
pub const fn spin_pattern(tick: u32) -> IndicatorMask {
    let step = sweep_step(tick);
    if step < 4 {
        rising(tick)
    } else if step < 8 {
        falling(tick)
    } else if tick % 2 == 0 {
        IndicatorMask::ALL
    } else {
        IndicatorMask::OFF
    }
}
