//! Cycle phase schedules
//!
//! A cycle runs Wash, Rinse and Spin back to back. The phase boundaries are
//! fixed tick counts that depend only on the mode; the phase itself is never
//! stored and is looked up again on every tick.

use crate::duty::DutyLevel;
use crate::mode::Mode;
use crate::pattern::{rinse_pattern, spin_pattern, wash_pattern, IndicatorMask};

/// Phase within a running cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Wash,
    Rinse,
    Spin,
    /// Schedule exhausted; the cycle ends on this tick
    Done,
}

impl Phase {
    /// Duty-cycle level driven during this phase
    pub const fn duty(self) -> DutyLevel {
        match self {
            Phase::Wash => DutyLevel::Low,
            Phase::Rinse => DutyLevel::Mid,
            Phase::Spin => DutyLevel::High,
            Phase::Done => DutyLevel::Off,
        }
    }

    /// Indicator lights for this phase at the given tick
    pub const fn pattern(self, tick: u32) -> IndicatorMask {
        match self {
            Phase::Wash => wash_pattern(tick),
            Phase::Rinse => rinse_pattern(tick),
            Phase::Spin => spin_pattern(tick),
            Phase::Done => IndicatorMask::OFF,
        }
    }
}

/// Tick thresholds for one cycle mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleSchedule {
    /// First tick of the rinse phase
    pub rinse_from: u16,
    /// First tick of the spin phase
    pub spin_from: u16,
    /// Tick at which the cycle is finished
    pub done_at: u16,
}

/// Standard cycle: 32 ticks per phase (about 18 s)
pub const NORMAL_SCHEDULE: CycleSchedule = CycleSchedule {
    rinse_from: 32,
    spin_from: 64,
    done_at: 96,
};

/// Extended cycle: double-length rinse (about 24 s)
pub const EXTENDED_SCHEDULE: CycleSchedule = CycleSchedule {
    rinse_from: 32,
    spin_from: 96,
    done_at: 128,
};

impl CycleSchedule {
    /// Schedule for a mode, or `None` if no cycle may run
    pub const fn for_mode(mode: Mode) -> Option<&'static CycleSchedule> {
        match mode {
            Mode::Extended => Some(&EXTENDED_SCHEDULE),
            Mode::Normal => Some(&NORMAL_SCHEDULE),
            Mode::Invalid => None,
        }
    }

    /// Phase in effect at the given tick
    pub const fn phase_at(&self, tick: u16) -> Phase {
        if tick < self.rinse_from {
            Phase::Wash
        } else if tick < self.spin_from {
            Phase::Rinse
        } else if tick < self.done_at {
            Phase::Spin
        } else {
            Phase::Done
        }
    }

    /// Ticks left before the cycle finishes
    pub const fn remaining(&self, tick: u16) -> u16 {
        self.done_at.saturating_sub(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_boundaries() {
        let s = &NORMAL_SCHEDULE;
        assert_eq!(s.phase_at(0), Phase::Wash);
        assert_eq!(s.phase_at(31), Phase::Wash);
        assert_eq!(s.phase_at(32), Phase::Rinse);
        assert_eq!(s.phase_at(63), Phase::Rinse);
        assert_eq!(s.phase_at(64), Phase::Spin);
        assert_eq!(s.phase_at(95), Phase::Spin);
        assert_eq!(s.phase_at(96), Phase::Done);
    }

    #[test]
    fn test_extended_boundaries() {
        let s = &EXTENDED_SCHEDULE;
        assert_eq!(s.phase_at(31), Phase::Wash);
        assert_eq!(s.phase_at(32), Phase::Rinse);
        assert_eq!(s.phase_at(95), Phase::Rinse);
        assert_eq!(s.phase_at(96), Phase::Spin);
        assert_eq!(s.phase_at(127), Phase::Spin);
        assert_eq!(s.phase_at(128), Phase::Done);
    }

    #[test]
    fn test_schedule_for_mode() {
        assert_eq!(CycleSchedule::for_mode(Mode::Normal), Some(&NORMAL_SCHEDULE));
        assert_eq!(
            CycleSchedule::for_mode(Mode::Extended),
            Some(&EXTENDED_SCHEDULE)
        );
        assert_eq!(CycleSchedule::for_mode(Mode::Invalid), None);
    }

    #[test]
    fn test_phase_outputs() {
        assert_eq!(Phase::Wash.duty(), DutyLevel::Low);
        assert_eq!(Phase::Rinse.duty(), DutyLevel::Mid);
        assert_eq!(Phase::Spin.duty(), DutyLevel::High);
        assert_eq!(Phase::Done.duty(), DutyLevel::Off);
        assert_eq!(Phase::Done.pattern(5), IndicatorMask::OFF);
        assert_eq!(Phase::Rinse.pattern(0), rinse_pattern(0));
    }

    #[test]
    fn test_remaining() {
        assert_eq!(NORMAL_SCHEDULE.remaining(0), 96);
        assert_eq!(NORMAL_SCHEDULE.remaining(90), 6);
        assert_eq!(NORMAL_SCHEDULE.remaining(200), 0);
    }
}
