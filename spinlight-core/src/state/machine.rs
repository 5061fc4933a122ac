//! State machine definition
//!
//! The duty-cycle output, the indicator lights and the two trigger gates are
//! all a function of the current state, the tick count and the selector.
//! The machine owns no hardware: each entry point updates the state and
//! the latched [`CycleOutputs`], and the caller applies them.

use super::events::Event;
use super::shared::CycleSnapshot;
use crate::duty::DutyLevel;
use crate::mode::{classify, SelectorState};
use crate::pattern::{wash_pattern, IndicatorMask};
use crate::schedule::{CycleSchedule, Phase};

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleState {
    /// Power-on or after Reset; waiting for Start
    #[default]
    Idle,
    /// Wash phase (10% output)
    Wash,
    /// Rinse phase (50% output)
    Rinse,
    /// Spin phase (90% output)
    Spin,
    /// Last cycle completed; waiting for Start or Reset
    Done,
}

impl CycleState {
    /// Check if a cycle is running
    pub fn is_running(&self) -> bool {
        matches!(self, CycleState::Wash | CycleState::Rinse | CycleState::Spin)
    }

    /// Cycle phase for this state, if a cycle has run
    pub fn phase(&self) -> Option<Phase> {
        match self {
            CycleState::Idle => None,
            CycleState::Wash => Some(Phase::Wash),
            CycleState::Rinse => Some(Phase::Rinse),
            CycleState::Spin => Some(Phase::Spin),
            CycleState::Done => Some(Phase::Done),
        }
    }

    fn from_phase(phase: Phase) -> Self {
        match phase {
            Phase::Wash => CycleState::Wash,
            Phase::Rinse => CycleState::Rinse,
            Phase::Spin => CycleState::Spin,
            Phase::Done => CycleState::Done,
        }
    }
}

/// A change of state caused by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: CycleState,
    pub to: CycleState,
}

/// Output levels latched by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutputs {
    /// Cycle output strength
    pub duty: DutyLevel,
    /// Indicator lights
    pub indicators: IndicatorMask,
    /// Tick delivery gate
    pub tick_enabled: bool,
    /// Start edge delivery gate
    pub start_enabled: bool,
}

impl CycleOutputs {
    /// Outputs while no cycle is running
    pub const IDLE: Self = Self {
        duty: DutyLevel::Off,
        indicators: IndicatorMask::OFF,
        tick_enabled: false,
        start_enabled: true,
    };
}

impl Default for CycleOutputs {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Wash / Rinse / Spin cycle state machine
#[derive(Debug, Clone)]
pub struct CycleMachine {
    state: CycleState,
    tick: u16,
    finished: bool,
    outputs: CycleOutputs,
}

impl Default for CycleMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleMachine {
    /// Create an idle machine
    pub const fn new() -> Self {
        Self {
            state: CycleState::Idle,
            tick: 0,
            finished: false,
            outputs: CycleOutputs::IDLE,
        }
    }

    /// Current state
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Current phase, `None` while idle
    pub fn phase(&self) -> Option<Phase> {
        self.state.phase()
    }

    /// Ticks elapsed in the current cycle
    pub fn tick(&self) -> u16 {
        self.tick
    }

    /// Check if a cycle is running
    pub fn is_active(&self) -> bool {
        self.state.is_running()
    }

    /// Check if the last cycle ran to completion
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Latched outputs
    pub fn outputs(&self) -> CycleOutputs {
        self.outputs
    }

    /// Copy of the shared part of the state
    pub fn snapshot(&self) -> CycleSnapshot {
        CycleSnapshot {
            tick: self.tick,
            active: self.is_active(),
            finished: self.finished,
        }
    }

    /// Dispatch an event to its entry point
    pub fn handle(&mut self, event: Event, selector: SelectorState) -> Option<Transition> {
        match event {
            Event::Start => self.on_start_edge(selector),
            Event::Reset => self.on_reset_edge(),
            Event::Tick => self.on_tick(selector),
        }
    }

    /// Start button pressed
    ///
    /// Ignored while a cycle is running (the gate is closed then). Any
    /// delivered edge clears `finished`; with a valid selector it also
    /// begins a fresh cycle in Wash.
    pub fn on_start_edge(&mut self, selector: SelectorState) -> Option<Transition> {
        if self.is_active() || !self.outputs.start_enabled {
            return None;
        }
        self.finished = false;
        if !classify(selector).is_valid() {
            return None;
        }

        let from = self.state;
        self.tick = 0;
        self.state = CycleState::Wash;
        self.outputs = CycleOutputs {
            duty: DutyLevel::Low,
            indicators: wash_pattern(0),
            tick_enabled: true,
            start_enabled: false,
        };

        Some(Transition {
            from,
            to: self.state,
        })
    }

    /// Reset button pressed
    ///
    /// Unconditional abort back to Idle from any state.
    pub fn on_reset_edge(&mut self) -> Option<Transition> {
        let from = self.state;
        self.stop(CycleState::Idle);
        self.finished = false;
        self.transition_from(from)
    }

    /// Periodic tick
    ///
    /// Ignored while idle. With an invalid selector the tick is swallowed
    /// without advancing, which freezes the cycle until the selector is
    /// fixed or Reset is pressed.
    pub fn on_tick(&mut self, selector: SelectorState) -> Option<Transition> {
        if !self.is_active() {
            return None;
        }
        let schedule = CycleSchedule::for_mode(classify(selector))?;

        let from = self.state;
        self.tick = self.tick.saturating_add(1);

        match schedule.phase_at(self.tick) {
            Phase::Done => {
                self.stop(CycleState::Done);
                self.finished = true;
            }
            phase => {
                self.state = CycleState::from_phase(phase);
                self.outputs.duty = phase.duty();
                self.outputs.indicators = phase.pattern(u32::from(self.tick));
            }
        }

        self.transition_from(from)
    }

    /// Common stop path for Reset and completion
    fn stop(&mut self, state: CycleState) {
        self.state = state;
        self.tick = 0;
        self.outputs = CycleOutputs::IDLE;
    }

    fn transition_from(&self, from: CycleState) -> Option<Transition> {
        (from != self.state).then_some(Transition {
            from,
            to: self.state,
        })
    }
}
