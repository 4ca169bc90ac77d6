mod engine;
mod phase;

pub use engine::{Clock, SystemClock, TimerEngine, TimerState};
pub use phase::{Mode, CYCLES_PER_LONG_BREAK, FOCUS_SECS, LONG_BREAK_SECS, SHORT_BREAK_SECS};
