//! Mock pins for driver tests

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

/// Output pin remembering its level and how often it was driven
#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub writes: u32,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        self.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        self.writes += 1;
        Ok(())
    }
}

/// Input pin with a level the test can change through a shared reference
pub struct MockInput<'a> {
    pub level: &'a Cell<bool>,
}

impl ErrorType for MockInput<'_> {
    type Error = Infallible;
}

impl InputPin for MockInput<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level.get())
    }
}

/// PWM channel with a 0..=1000 range
#[derive(Default)]
pub struct MockPwm {
    pub duty: u16,
}

impl pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        1000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.duty = duty;
        Ok(())
    }
}
