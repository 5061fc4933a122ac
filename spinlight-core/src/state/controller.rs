//! Cycle controller
//!
//! Binds a [`CycleMachine`] to the board outputs. After every event the
//! controller publishes the new [`CycleSnapshot`](super::CycleSnapshot)
//! and writes only the outputs whose latched value changed.

use super::events::Event;
use super::machine::{CycleMachine, CycleOutputs, Transition};
use super::shared::SharedCycle;
use crate::duty::DutyLevel;
use crate::mode::SelectorState;
use crate::pattern::IndicatorMask;
use crate::traits::{DutyCycleOutput, IndicatorOutput, StartTrigger, TickSource};

/// Failure writing one of the cycle outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError<D, I> {
    /// Duty-cycle output rejected the new level
    Duty(D),
    /// Indicator lights rejected the new mask
    Indicators(I),
}

/// Values last written to each output (`None` = never written or failed)
#[derive(Debug, Clone, Copy, Default)]
struct Applied {
    duty: Option<DutyLevel>,
    indicators: Option<IndicatorMask>,
    tick_enabled: Option<bool>,
    start_enabled: Option<bool>,
}

/// Cycle state machine wired to its outputs and trigger gates
pub struct CycleController<'a, D, I, T, S> {
    machine: CycleMachine,
    duty: D,
    indicators: I,
    ticks: T,
    start: S,
    shared: &'a SharedCycle,
    applied: Applied,
}

impl<'a, D, I, T, S> CycleController<'a, D, I, T, S>
where
    D: DutyCycleOutput,
    I: IndicatorOutput,
    T: TickSource,
    S: StartTrigger,
{
    /// Create a controller in the idle state
    ///
    /// Nothing is written until [`init`](Self::init) or the first event.
    pub fn new(duty: D, indicators: I, ticks: T, start: S, shared: &'a SharedCycle) -> Self {
        Self {
            machine: CycleMachine::new(),
            duty,
            indicators,
            ticks,
            start,
            shared,
            applied: Applied::default(),
        }
    }

    /// Drive every output to its idle level
    pub fn init(&mut self) -> Result<(), OutputError<D::Error, I::Error>> {
        self.sync()
    }

    /// The underlying state machine
    pub fn machine(&self) -> &CycleMachine {
        &self.machine
    }

    /// Duty-cycle output
    pub fn duty_output(&self) -> &D {
        &self.duty
    }

    /// Indicator output
    pub fn indicator_output(&self) -> &I {
        &self.indicators
    }

    /// Tick source gate
    pub fn tick_source(&self) -> &T {
        &self.ticks
    }

    /// Start trigger gate
    pub fn start_trigger(&self) -> &S {
        &self.start
    }

    /// Handle one event and apply the resulting outputs
    ///
    /// The state change stands even if an output write fails; the failed
    /// output is retried on the next event.
    pub fn dispatch(
        &mut self,
        event: Event,
        selector: SelectorState,
    ) -> Result<Option<Transition>, OutputError<D::Error, I::Error>> {
        let transition = self.machine.handle(event, selector);
        self.sync()?;
        Ok(transition)
    }

    /// Start button edge
    pub fn on_start_edge(
        &mut self,
        selector: SelectorState,
    ) -> Result<Option<Transition>, OutputError<D::Error, I::Error>> {
        self.dispatch(Event::Start, selector)
    }

    /// Reset button edge
    pub fn on_reset_edge(
        &mut self,
    ) -> Result<Option<Transition>, OutputError<D::Error, I::Error>> {
        self.dispatch(Event::Reset, SelectorState::default())
    }

    /// Periodic cycle tick
    pub fn on_tick(
        &mut self,
        selector: SelectorState,
    ) -> Result<Option<Transition>, OutputError<D::Error, I::Error>> {
        self.dispatch(Event::Tick, selector)
    }

    /// Publish the snapshot and write changed outputs
    ///
    /// Both outputs are attempted even if the first one fails; the first
    /// error is returned. While an output is out of sync the tick gate is
    /// held open, so the next tick retries the write even after the
    /// machine has stopped.
    fn sync(&mut self) -> Result<(), OutputError<D::Error, I::Error>> {
        self.shared.publish(self.machine.snapshot());

        let CycleOutputs {
            duty,
            indicators,
            tick_enabled,
            start_enabled,
        } = self.machine.outputs();

        let mut result = Ok(());

        if self.applied.duty != Some(duty) {
            self.applied.duty = None;
            match self.duty.set_level(duty) {
                Ok(()) => self.applied.duty = Some(duty),
                Err(e) => result = Err(OutputError::Duty(e)),
            }
        }

        if self.applied.indicators != Some(indicators) {
            self.applied.indicators = None;
            match self.indicators.set_mask(indicators) {
                Ok(()) => self.applied.indicators = Some(indicators),
                Err(e) => {
                    if result.is_ok() {
                        result = Err(OutputError::Indicators(e));
                    }
                }
            }
        }

        let tick_enabled = tick_enabled || result.is_err();
        if self.applied.tick_enabled != Some(tick_enabled) {
            self.ticks.set_enabled(tick_enabled);
            self.applied.tick_enabled = Some(tick_enabled);
        }

        if self.applied.start_enabled != Some(start_enabled) {
            self.start.set_enabled(start_enabled);
            self.applied.start_enabled = Some(start_enabled);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::machine::CycleState;
    use core::convert::Infallible;

    #[derive(Default)]
    struct MockDuty {
        level: DutyLevel,
        writes: u32,
        fail: bool,
    }

    impl DutyCycleOutput for MockDuty {
        type Error = ();

        fn set_level(&mut self, level: DutyLevel) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.level = level;
            self.writes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockLights {
        mask: IndicatorMask,
        writes: u32,
    }

    impl IndicatorOutput for MockLights {
        type Error = Infallible;

        fn set_mask(&mut self, mask: IndicatorMask) -> Result<(), Infallible> {
            self.mask = mask;
            self.writes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockGate {
        enabled: bool,
        changes: u32,
    }

    impl TickSource for MockGate {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            self.changes += 1;
        }
    }

    impl StartTrigger for MockGate {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
            self.changes += 1;
        }
    }

    type TestController<'a> = CycleController<'a, MockDuty, MockLights, MockGate, MockGate>;

    fn controller(shared: &SharedCycle) -> TestController<'_> {
        CycleController::new(
            MockDuty::default(),
            MockLights::default(),
            MockGate::default(),
            MockGate::default(),
            shared,
        )
    }

    const NORMAL: SelectorState = SelectorState::new(0, false);

    #[test]
    fn test_init_writes_idle_outputs() {
        let shared = SharedCycle::new();
        let mut ctl = controller(&shared);
        ctl.init().unwrap();

        assert_eq!(ctl.duty_output().writes, 1);
        assert_eq!(ctl.duty_output().level, DutyLevel::Off);
        assert_eq!(ctl.indicator_output().writes, 1);
        assert!(!ctl.tick_source().enabled);
        assert!(ctl.start_trigger().enabled);
    }

    #[test]
    fn test_start_opens_tick_gate() {
        let shared = SharedCycle::new();
        let mut ctl = controller(&shared);
        ctl.init().unwrap();

        ctl.on_start_edge(NORMAL).unwrap();
        assert!(ctl.tick_source().enabled);
        assert!(!ctl.start_trigger().enabled);
        assert_eq!(ctl.duty_output().level, DutyLevel::Low);
        assert_eq!(ctl.indicator_output().mask.bits(), 1);
        assert!(shared.snapshot().active);
    }

    #[test]
    fn test_unchanged_outputs_not_rewritten() {
        let shared = SharedCycle::new();
        let mut ctl = controller(&shared);
        ctl.init().unwrap();
        ctl.on_start_edge(NORMAL).unwrap();

        // Duty stays Low for the whole wash phase
        for _ in 0..31 {
            ctl.on_tick(NORMAL).unwrap();
        }
        assert_eq!(ctl.duty_output().writes, 2);
        assert_eq!(ctl.tick_source().changes, 2);

        ctl.on_tick(NORMAL).unwrap();
        assert_eq!(ctl.duty_output().writes, 3);
        assert_eq!(ctl.duty_output().level, DutyLevel::Mid);
    }

    #[test]
    fn test_completion_publishes_finished() {
        let shared = SharedCycle::new();
        let mut ctl = controller(&shared);
        ctl.init().unwrap();
        ctl.on_start_edge(NORMAL).unwrap();

        let mut done = None;
        for _ in 0..96 {
            if let Some(t) = ctl.on_tick(NORMAL).unwrap() {
                done = Some(t);
            }
        }

        assert_eq!(done.map(|t| t.to), Some(CycleState::Done));
        assert!(shared.is_finished());
        assert!(!shared.snapshot().active);
        assert_eq!(ctl.duty_output().level, DutyLevel::Off);
        assert_eq!(ctl.indicator_output().mask, IndicatorMask::OFF);
        assert!(!ctl.tick_source().enabled);
        assert!(ctl.start_trigger().enabled);
    }

    #[test]
    fn test_failed_write_on_completion_keeps_ticking() {
        let shared = SharedCycle::new();
        let mut ctl = controller(&shared);
        ctl.init().unwrap();
        ctl.on_start_edge(NORMAL).unwrap();
        for _ in 0..95 {
            ctl.on_tick(NORMAL).unwrap();
        }
        assert_eq!(ctl.duty_output().level, DutyLevel::High);

        ctl.duty.fail = true;
        assert_eq!(ctl.on_tick(NORMAL), Err(OutputError::Duty(())));
        assert!(shared.is_finished());
        // Lights still follow the machine and ticks keep coming for the retry
        assert_eq!(ctl.indicator_output().mask, IndicatorMask::OFF);
        assert!(ctl.tick_source().enabled);
        assert!(ctl.start_trigger().enabled);

        ctl.duty.fail = false;
        assert_eq!(ctl.on_tick(NORMAL), Ok(None));
        assert_eq!(ctl.duty_output().level, DutyLevel::Off);
        assert!(!ctl.tick_source().enabled);
        assert_eq!(ctl.machine().state(), CycleState::Done);
    }

    #[test]
    fn test_failed_write_is_retried() {
        let shared = SharedCycle::new();
        let mut ctl = controller(&shared);
        ctl.init().unwrap();

        ctl.duty.fail = true;
        assert_eq!(ctl.on_start_edge(NORMAL), Err(OutputError::Duty(())));
        // State change stands
        assert!(ctl.machine().is_active());
        assert!(shared.snapshot().active);

        ctl.duty.fail = false;
        ctl.on_tick(NORMAL).unwrap();
        assert_eq!(ctl.duty_output().level, DutyLevel::Low);
    }
}
