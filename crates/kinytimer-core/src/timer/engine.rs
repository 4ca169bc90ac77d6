//! Timer engine implementation.
//!
//! The engine is a second-granularity state machine. It has no internal
//! thread or timer - the caller invokes `tick()` once per elapsed second,
//! and every other mutation happens through an explicit command.
//!
//! ## Phase transitions
//!
//! ```text
//! Focus --(cycle % 4 == 0)--> LongBreak --+
//!   |                                     |
//!   +--(otherwise)--> ShortBreak ---------+--> Focus (cycle + 1)
//! ```
//!
//! A completed phase never auto-starts; the user acknowledges each
//! transition with an explicit `start()`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Box::new(store))?;
//! engine.set_project(Some(project));
//! engine.start();
//! // Once per elapsed second:
//! engine.tick()?; // Returns Some(Event::PhaseCompleted) at zero
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::phase::{Mode, CYCLES_PER_LONG_BREAK, FOCUS_SECS};
use crate::error::CoreError;
use crate::events::Event;
use crate::session::{Project, Session};
use crate::storage::SessionStore;

/// Source of wall-clock timestamps for session records.
///
/// Production code uses [`SystemClock`]; tests substitute a manual clock so
/// session durations are deterministic.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Countdown state. Never persisted - only derived sessions are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub is_running: bool,
    /// Pause suspends ticking without clearing `is_running`.
    pub is_paused: bool,
    /// Remaining whole seconds in the current phase.
    pub remaining_secs: u32,
    pub mode: Mode,
    /// Count of the focus phase currently in progress, starting at 1.
    pub cycle: u32,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            is_running: false,
            is_paused: false,
            remaining_secs: FOCUS_SECS,
            mode: Mode::Focus,
            cycle: 1,
        }
    }
}

/// Core timer engine.
///
/// Owns the countdown state, the single open session (if any), and the full
/// in-memory session history. Completed sessions are persisted through the
/// [`SessionStore`] seam with whole-collection overwrite semantics.
pub struct TimerEngine {
    state: TimerState,
    open_session: Option<Session>,
    history: Vec<Session>,
    project: Option<Project>,
    store: Box<dyn SessionStore>,
    clock: Box<dyn Clock>,
}

impl TimerEngine {
    /// Create an engine backed by `store`, loading the session history.
    pub fn new(store: Box<dyn SessionStore>) -> Result<Self, CoreError> {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: Box<dyn SessionStore>, clock: Box<dyn Clock>) -> Result<Self, CoreError> {
        let history = store.load_sessions()?;
        Ok(Self {
            state: TimerState::default(),
            open_session: None,
            history,
            project: None,
            store,
            clock,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    pub fn open_session(&self) -> Option<&Session> {
        self.open_session.as_ref()
    }

    /// All closed sessions, oldest first.
    pub fn history(&self) -> &[Session] {
        &self.history
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn phase_progress(&self) -> f64 {
        let total = self.state.mode.phase_secs();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.state.remaining_secs as f64 / total as f64)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select the project new sessions are booked against. The engine does
    /// not own project selection; the caller supplies it.
    pub fn set_project(&mut self, project: Option<Project>) {
        self.project = project;
    }

    /// Start the countdown, opening a work session on a fresh focus phase.
    ///
    /// With no project selected this is a guarded no-op. Starting while
    /// paused resumes the open session rather than reopening it; starting
    /// while already running is idempotent.
    pub fn start(&mut self) -> Option<Event> {
        let project = self.project.as_ref()?;

        if self.open_session.is_none() && self.state.mode == Mode::Focus {
            self.open_session = Some(Session::open(project.id.clone(), self.clock.now()));
        }
        self.state.is_running = true;
        self.state.is_paused = false;

        Some(Event::TimerStarted {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            cycle: self.state.cycle,
            at: self.clock.now(),
        })
    }

    /// Suspend ticking. The open session stays open and keeps accumulating
    /// wall-clock time once resumed.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.state.is_paused = true;
        Some(Event::TimerPaused {
            remaining_secs: self.state.remaining_secs,
            at: self.clock.now(),
        })
    }

    /// Close any open session, persist the history, and reset the timer to
    /// its fixed initial state (focus phase, cycle 1).
    pub fn stop(&mut self) -> Result<Event, CoreError> {
        let closed = self.close_open_session()?;
        self.state = TimerState::default();
        Ok(Event::TimerStopped {
            closed_session: closed,
            at: self.clock.now(),
        })
    }

    /// `stop()` followed by restoring the current mode's phase length.
    ///
    /// Stop already forces the mode to focus, so the restoration is a
    /// no-op in every reachable state. Deliberately not "fixed" to keep
    /// the pre-reset mode.
    pub fn reset(&mut self) -> Result<Event, CoreError> {
        self.stop()?;
        self.state.remaining_secs = self.state.mode.phase_secs();
        Ok(Event::TimerReset {
            at: self.clock.now(),
        })
    }

    /// Advance the countdown by one elapsed second.
    ///
    /// Only decrements while running and not paused. Reaching zero performs
    /// the phase transition within the same call, so completion is never
    /// observed after a subsequent tick.
    pub fn tick(&mut self) -> Result<Option<Event>, CoreError> {
        if !self.state.is_running || self.state.is_paused || self.state.remaining_secs == 0 {
            return Ok(None);
        }
        self.state.remaining_secs -= 1;
        if self.state.remaining_secs == 0 {
            return self.complete_phase().map(Some);
        }
        Ok(None)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn complete_phase(&mut self) -> Result<Event, CoreError> {
        let closed = self.close_open_session()?;
        let completed = self.state.mode;

        match completed {
            Mode::Focus => {
                self.state.mode = if self.state.cycle % CYCLES_PER_LONG_BREAK == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                };
            }
            Mode::ShortBreak | Mode::LongBreak => {
                self.state.mode = Mode::Focus;
                self.state.cycle += 1;
            }
        }
        self.state.remaining_secs = self.state.mode.phase_secs();
        self.state.is_running = false;
        self.state.is_paused = false;

        Ok(Event::PhaseCompleted {
            completed,
            next: self.state.mode,
            cycle: self.state.cycle,
            closed_session: closed,
            at: self.clock.now(),
        })
    }

    /// Close the open session, append it to the history, and persist the
    /// full history.
    fn close_open_session(&mut self) -> Result<Option<Session>, CoreError> {
        let Some(mut session) = self.open_session.take() else {
            return Ok(None);
        };
        session.close(self.clock.now());
        self.history.push(session.clone());
        self.store.save_sessions(&self.history)?;
        Ok(Some(session))
    }
}
