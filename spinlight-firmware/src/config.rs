//! Board and timing parameters
//!
//! Fixed at build time. Values are chosen for a 125 MHz RP2040 system clock.

use embassy_time::Duration;

/// Cycle tick and display refresh timing
#[derive(Debug, Clone, Copy)]
pub struct CycleTimingConfig {
    /// Cycle tick period in microseconds (16 ticks per 3 s)
    pub tick_period_us: u64,
    /// Time each digit stays lit before the display switches digits
    pub digit_refresh_us: u64,
}

impl Default for CycleTimingConfig {
    fn default() -> Self {
        Self {
            tick_period_us: 187_500,
            digit_refresh_us: 2_000,
        }
    }
}

impl CycleTimingConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_micros(self.tick_period_us)
    }

    pub fn digit_refresh(&self) -> Duration {
        Duration::from_micros(self.digit_refresh_us)
    }
}

/// PWM settings for the duty-cycle output
#[derive(Debug, Clone, Copy)]
pub struct DutyPwmConfig {
    /// PWM top value; duty levels are scaled onto 0..=top
    pub top: u16,
    /// Integer clock divider
    pub divider: u8,
    /// If true, the load is on while the pin is low
    pub inverted: bool,
}

impl Default for DutyPwmConfig {
    fn default() -> Self {
        Self {
            top: 255,
            divider: 122, // 125 MHz / 122 / 256 = ~4 kHz
            inverted: false,
        }
    }
}

impl DutyPwmConfig {
    /// Slice configuration with the output off
    pub fn pwm_config(&self) -> embassy_rp::pwm::Config {
        let mut config = embassy_rp::pwm::Config::default();
        config.top = self.top;
        config.divider = self.divider.into();
        config.compare_a = if self.inverted { self.top } else { 0 };
        config
    }
}
