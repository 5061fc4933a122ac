//! Cycle controller shared by the event tasks
//!
//! The controller and the selector pins live in critical-section mutexes.
//! Each event runs selector read, transition and output writes inside one
//! critical section, so a Reset never lands between the halves of a Tick.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::PwmOutput;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::Ordering;

use spinlight_core::state::{CycleController, Event, OutputError, Transition};
use spinlight_core::traits::{SelectorInput, StartTrigger, TickSource};
use spinlight_core::{CycleSchedule, Phase, SelectorState, WaterLevel};
use spinlight_drivers::{IndicatorPins, PwmDuty, SelectorPins};

use crate::channels::{CYCLE_STATUS, START_ENABLED, TICK_GATE};

/// Opens and closes tick delivery in the tick task
pub struct TickGate;

impl TickSource for TickGate {
    fn set_enabled(&mut self, enabled: bool) {
        TICK_GATE.signal(enabled);
    }
}

/// Opens and closes Start edge delivery in the button task
pub struct StartGate;

impl StartTrigger for StartGate {
    fn set_enabled(&mut self, enabled: bool) {
        START_ENABLED.store(enabled, Ordering::Release);
    }
}

pub type Board = CycleController<
    'static,
    PwmDuty<PwmOutput<'static>>,
    IndicatorPins<Output<'static>>,
    TickGate,
    StartGate,
>;

pub type Selector = SelectorPins<Input<'static>>;

static BOARD: Mutex<CriticalSectionRawMutex, RefCell<Option<Board>>> =
    Mutex::new(RefCell::new(None));

static SELECTOR: Mutex<CriticalSectionRawMutex, RefCell<Option<Selector>>> =
    Mutex::new(RefCell::new(None));

/// Reading used when the selector cannot be sampled; blocks every cycle
const UNREADABLE: SelectorState = SelectorState {
    water_level: WaterLevel::ERROR,
    extended_selected: false,
};

/// Build the controller over the board outputs
pub fn board(duty: PwmDuty<PwmOutput<'static>>, lights: IndicatorPins<Output<'static>>) -> Board {
    CycleController::new(duty, lights, TickGate, StartGate, &CYCLE_STATUS)
}

/// Write the idle outputs and make the controller available to the tasks
pub fn install(mut board: Board, selector: Selector) {
    if let Err(e) = board.init() {
        report(e);
    }
    SELECTOR.lock(|cell| {
        cell.replace(Some(selector));
    });
    BOARD.lock(|cell| {
        cell.replace(Some(board));
    });
    info!("Controller installed");
}

/// Sample the selector switches
pub fn read_selector() -> SelectorState {
    SELECTOR
        .lock(|cell| cell.borrow_mut().as_mut().map(|s| s.read()))
        .and_then(|r| r.ok())
        .unwrap_or(UNREADABLE)
}

/// Deliver one event to the state machine
pub fn dispatch(event: Event) {
    let outcome = BOARD.lock(|cell| {
        let mut guard = cell.borrow_mut();
        let board = guard.as_mut()?;
        let selector = read_selector();
        let result = board.dispatch(event, selector);
        let machine = board.machine();
        Some((result, machine.tick(), machine.phase(), selector))
    });

    match outcome {
        None => warn!("{} dropped, controller not installed", event),
        Some((Ok(Some(transition)), tick, phase, selector)) => {
            log_transition(transition, tick, phase, selector)
        }
        Some((Ok(None), tick, _, _)) => {
            if event == Event::Tick {
                trace!("Tick {}", tick);
            } else {
                debug!("{} ignored", event);
            }
        }
        Some((Err(e), ..)) => report(e),
    }
}

fn log_transition(
    transition: Transition,
    tick: u16,
    phase: Option<Phase>,
    selector: SelectorState,
) {
    info!(
        "Cycle {} -> {} at tick {}",
        transition.from, transition.to, tick
    );
    let Some(phase) = phase else {
        return;
    };
    debug!("{} output at {}%", phase, phase.duty().percent());
    if transition.to.is_running() {
        if let Some(schedule) = CycleSchedule::for_mode(selector.mode()) {
            debug!("{} ticks until done", schedule.remaining(tick));
        }
    }
}

fn report<D, I>(err: OutputError<D, I>) {
    match err {
        OutputError::Duty(_) => warn!("Duty output write failed, retrying on next event"),
        OutputError::Indicators(_) => warn!("Indicator write failed, retrying on next event"),
    }
}
