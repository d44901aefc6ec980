//! Tuning Controller
//!
//! The per-iteration control step. Each call to [`TuningController::step`]:
//!
//! 1. refreshes the auto/manual indicator
//! 2. polls the tuner and, when a snapshot is ready, redraws the reading
//! 3. while searching, asks the tuner whether the search has concluded
//! 4. handles a pending `GoUp` request
//! 5. handles a pending `GoDown` request
//!
//! A request starts a search in auto mode and steps the frequency by 0.1 MHz
//! in manual mode. Requests arriving while a search runs are dropped; there
//! is no cancel and no timeout, a search runs until the tuner reports it done.
//!
//! After a search is issued the tuner needs a short settle pause before its
//! status is meaningful. [`TuningController::settle_after`] reports it so the
//! caller can wait without blocking the executor.

use core::fmt;

use heapless::Vec;

use super::state::TuningState;
use super::status::{StatusFlag, StatusRegister};
use super::tuner::Tuner;
use crate::types::{Direction, Frequency, ReceiverReading, TuningMode};
use crate::ui::presenter::DisplayPresenter;
use crate::ui::CharacterDisplay;

/// Most events one iteration can produce
///
/// One reading, one search completion and one event per request flag.
pub const MAX_EVENTS: usize = 4;

/// Something that happened during one iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuningEvent {
    /// A fresh reading was drawn
    ReadingShown(ReceiverReading),
    /// The tuner finished a search at this frequency
    SearchCompleted(Frequency),
    /// A search was started
    SearchStarted(Direction),
    /// A manual step retuned the tuner
    Retuned(Frequency),
    /// A manual step hit the band edge and was ignored
    AtBandEdge(Direction),
    /// A request arrived during a search (or before any reading) and was dropped
    RequestDropped(Direction),
}

#[cfg(feature = "embedded")]
impl defmt::Format for TuningEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ReadingShown(reading) => defmt::write!(f, "Shown({})", reading),
            Self::SearchCompleted(freq) => defmt::write!(f, "SearchDone({})", freq),
            Self::SearchStarted(dir) => defmt::write!(f, "Search({})", dir),
            Self::Retuned(freq) => defmt::write!(f, "Retune({})", freq),
            Self::AtBandEdge(dir) => defmt::write!(f, "BandEdge({})", dir),
            Self::RequestDropped(dir) => defmt::write!(f, "Dropped({})", dir),
        }
    }
}

/// Events produced by one iteration, in order
pub type TuningEvents = Vec<TuningEvent, MAX_EVENTS>;

/// Bus failure during an iteration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelError<T, D> {
    /// Tuner bus error
    Tuner(T),
    /// Display bus error
    Display(D),
}

impl<T: fmt::Debug, D: fmt::Debug> fmt::Display for PanelError<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tuner(e) => write!(f, "tuner bus error: {e:?}"),
            Self::Display(e) => write!(f, "display bus error: {e:?}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl<T, D> defmt::Format for PanelError<T, D> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Tuner(_) => defmt::write!(f, "tuner bus error"),
            Self::Display(_) => defmt::write!(f, "display bus error"),
        }
    }
}

/// Controller result for a given tuner and display
pub type PanelResult<T, Tn, D> =
    Result<T, PanelError<<Tn as Tuner>::Error, <D as CharacterDisplay>::Error>>;

/// Owns the tuning state and drives tuner and display from the status flags
pub struct TuningController<'a, T: Tuner, D: CharacterDisplay> {
    status: &'a StatusRegister,
    state: TuningState,
    tuner: T,
    presenter: DisplayPresenter<D>,
    /// Most recent snapshot, searches start from its frequency
    latest: Option<T::Snapshot>,
    settle_ms: u32,
}

impl<'a, T: Tuner, D: CharacterDisplay> TuningController<'a, T, D> {
    /// Create a controller tuned (once started) to `frequency`
    #[must_use]
    pub fn new(status: &'a StatusRegister, tuner: T, display: D, frequency: Frequency) -> Self {
        Self {
            status,
            state: TuningState::new(frequency),
            tuner,
            presenter: DisplayPresenter::new(display),
            latest: None,
            settle_ms: crate::config::SEARCH_SETTLE_MS,
        }
    }

    /// Override the post-search settle pause
    #[must_use]
    pub fn with_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Bring up tuner and display and tune to the initial frequency
    pub fn start(&mut self) -> PanelResult<(), T, D> {
        self.tuner.init().map_err(PanelError::Tuner)?;
        self.tuner
            .set_frequency(self.state.frequency())
            .map_err(PanelError::Tuner)?;
        self.presenter.init().map_err(PanelError::Display)?;
        self.presenter
            .show_mode(self.mode())
            .map_err(PanelError::Display)?;
        info!("tuner started at {}", self.state.frequency());
        Ok(())
    }

    /// Run one control iteration
    ///
    /// Never blocks. On a bus error the rest of the iteration is skipped and
    /// any request flag not yet acted on, including the one that failed,
    /// stays set for the next iteration.
    pub fn step(&mut self) -> PanelResult<TuningEvents, T, D> {
        let mut events = TuningEvents::new();

        self.presenter
            .show_mode(self.mode())
            .map_err(PanelError::Display)?;

        let fresh = self.tuner.read_status().map_err(PanelError::Tuner)?;
        if let Some(snapshot) = fresh {
            let reading = self.tuner.reading(&snapshot);
            self.state = self.state.with_frequency(reading.frequency());
            self.status.assign(StatusFlag::StereoDetected, reading.stereo);
            self.latest = Some(snapshot);
            self.presenter
                .show_reading(&reading)
                .map_err(PanelError::Display)?;
            push_event(&mut events, TuningEvent::ReadingShown(reading));
        }

        if self.status.is_set(StatusFlag::Searching) {
            if let Some(snapshot) = fresh {
                let direction = self.state.search_direction().unwrap_or(Direction::Up);
                if self
                    .tuner
                    .is_search_complete(&snapshot, direction)
                    .map_err(PanelError::Tuner)?
                {
                    self.status.clear(StatusFlag::Searching);
                    self.state = self.state.idle();
                    debug!("search {} done at {}", direction, self.state.frequency());
                    push_event(&mut events, TuningEvent::SearchCompleted(self.state.frequency()));
                }
            }
        }

        for (flag, direction) in [
            (StatusFlag::GoUp, Direction::Up),
            (StatusFlag::GoDown, Direction::Down),
        ] {
            if self.status.take(flag) {
                match self.handle_request(direction) {
                    Ok(event) => push_event(&mut events, event),
                    Err(e) => {
                        self.status.set(flag);
                        return Err(e);
                    }
                }
            }
        }

        Ok(events)
    }

    /// Settle pause owed after an iteration that started a search
    #[must_use]
    pub fn settle_after(&self, events: &[TuningEvent]) -> Option<u32> {
        events
            .iter()
            .any(|e| matches!(e, TuningEvent::SearchStarted(_)))
            .then_some(self.settle_ms)
    }

    /// Act on one encoder request
    fn handle_request(&mut self, direction: Direction) -> PanelResult<TuningEvent, T, D> {
        if self.status.is_set(StatusFlag::Searching) {
            return Ok(TuningEvent::RequestDropped(direction));
        }

        if self.status.is_set(StatusFlag::AutoMode) {
            let Some(snapshot) = self.latest else {
                warn!("search {} requested before any tuner reading", direction);
                return Ok(TuningEvent::RequestDropped(direction));
            };
            self.tuner
                .search(&snapshot, direction)
                .map_err(PanelError::Tuner)?;
            self.status.set(StatusFlag::Searching);
            self.state = self.state.searching(direction);
            return Ok(TuningEvent::SearchStarted(direction));
        }

        match self.state.stepped(direction) {
            Some(next) => {
                self.tuner
                    .set_frequency(next.frequency())
                    .map_err(PanelError::Tuner)?;
                self.state = next;
                Ok(TuningEvent::Retuned(next.frequency()))
            }
            None => Ok(TuningEvent::AtBandEdge(direction)),
        }
    }

    /// Current tuning mode from the status flags
    #[must_use]
    pub fn mode(&self) -> TuningMode {
        TuningMode::from_auto(self.status.is_set(StatusFlag::AutoMode))
    }

    /// Current tuning state
    #[must_use]
    pub const fn state(&self) -> TuningState {
        self.state
    }

    /// Check if a search is running
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.status.is_set(StatusFlag::Searching)
    }

    /// Borrow the tuner
    #[must_use]
    pub const fn tuner(&self) -> &T {
        &self.tuner
    }

    /// Borrow the presenter
    #[must_use]
    pub const fn presenter(&self) -> &DisplayPresenter<D> {
        &self.presenter
    }

    /// Take tuner and display back
    pub fn release(self) -> (T, D) {
        (self.tuner, self.presenter.release())
    }
}

/// Append an event; an iteration never produces more than [`MAX_EVENTS`]
fn push_event(events: &mut TuningEvents, event: TuningEvent) {
    debug_assert!(!events.is_full(), "more than MAX_EVENTS in one iteration");
    events.push(event).ok();
}
