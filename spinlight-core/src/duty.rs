//! Duty-cycle output levels
//!
//! The cycle output (motor or valve) is driven at one of four fixed
//! strengths. Drivers map a level onto their PWM range.

/// Duty-cycle level for the cycle output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DutyLevel {
    /// Output disabled
    #[default]
    Off,
    /// 10% duty (wash)
    Low,
    /// 50% duty (rinse)
    Mid,
    /// 90% duty (spin)
    High,
}

impl DutyLevel {
    /// Duty cycle as a percentage (0-100)
    pub const fn percent(self) -> u8 {
        match self {
            DutyLevel::Off => 0,
            DutyLevel::Low => 10,
            DutyLevel::Mid => 50,
            DutyLevel::High => 90,
        }
    }

    /// Compare value for a PWM counter running from 0 to `top`
    pub const fn compare(self, top: u16) -> u16 {
        (top as u32 * self.percent() as u32 / 100) as u16
    }

    /// Compare value for an active-low output stage
    ///
    /// The output is high for the part of the period above the compare
    /// value, so `Off` maps to `top` and `High` to 10% of `top`.
    pub const fn inverted_compare(self, top: u16) -> u16 {
        top - self.compare(top)
    }
}
