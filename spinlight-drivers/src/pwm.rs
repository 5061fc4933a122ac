//! PWM duty-cycle output
//!
//! Maps the four duty levels onto a PWM channel's compare range. Output
//! stages that switch the load on a low level are driven inverted.

use embedded_hal::pwm::SetDutyCycle;
use spinlight_core::traits::DutyCycleOutput;
use spinlight_core::DutyLevel;

/// Duty-cycle output on one PWM channel
pub struct PwmDuty<P> {
    channel: P,
    /// If true, the load is on while the pin is low
    inverted: bool,
    level: DutyLevel,
}

impl<P: SetDutyCycle> PwmDuty<P> {
    /// Wrap a PWM channel and force it off
    pub fn new(channel: P, inverted: bool) -> Result<Self, P::Error> {
        let mut out = Self {
            channel,
            inverted,
            level: DutyLevel::Off,
        };
        out.apply(DutyLevel::Off)?;
        Ok(out)
    }

    /// Load on while the pin is high
    pub fn new_active_high(channel: P) -> Result<Self, P::Error> {
        Self::new(channel, false)
    }

    /// Load on while the pin is low
    pub fn new_active_low(channel: P) -> Result<Self, P::Error> {
        Self::new(channel, true)
    }

    /// Level last applied
    pub fn level(&self) -> DutyLevel {
        self.level
    }

    fn apply(&mut self, level: DutyLevel) -> Result<(), P::Error> {
        let top = self.channel.max_duty_cycle();
        let duty = if self.inverted {
            level.inverted_compare(top)
        } else {
            level.compare(top)
        };
        self.channel.set_duty_cycle(duty)?;
        self.level = level;
        Ok(())
    }
}

impl<P: SetDutyCycle> DutyCycleOutput for PwmDuty<P> {
    type Error = P::Error;

    fn set_level(&mut self, level: DutyLevel) -> Result<(), Self::Error> {
        self.apply(level)
    }
}
