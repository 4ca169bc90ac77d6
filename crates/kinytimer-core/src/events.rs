use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::timer::Mode;

/// Every observable state change in the engine produces an Event.
/// The presentation layer renders them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u32,
        cycle: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Timer stopped by the user; carries the session closed on the way out,
    /// if one was open.
    TimerStopped {
        closed_session: Option<Session>,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A phase counted down to zero. The next phase starts not running.
    PhaseCompleted {
        completed: Mode,
        next: Mode,
        cycle: u32,
        closed_session: Option<Session>,
        at: DateTime<Utc>,
    },
}
