use serde::{Deserialize, Serialize};

/// Focus phase length in seconds.
pub const FOCUS_SECS: u32 = 25 * 60;
/// Short break length in seconds.
pub const SHORT_BREAK_SECS: u32 = 5 * 60;
/// Long break length in seconds.
pub const LONG_BREAK_SECS: u32 = 15 * 60;
/// Every fourth completed focus phase earns a long break.
pub const CYCLES_PER_LONG_BREAK: u32 = 4;

/// A countdown segment with a fixed canonical length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Canonical phase length in seconds. Fixed constants; the stored
    /// settings record is not consulted here.
    pub fn phase_secs(self) -> u32 {
        match self {
            Mode::Focus => FOCUS_SECS,
            Mode::ShortBreak => SHORT_BREAK_SECS,
            Mode::LongBreak => LONG_BREAK_SECS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_lengths() {
        assert_eq!(Mode::Focus.phase_secs(), 1500);
        assert_eq!(Mode::ShortBreak.phase_secs(), 300);
        assert_eq!(Mode::LongBreak.phase_secs(), 900);
    }

    #[test]
    fn mode_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&Mode::ShortBreak).unwrap(),
            "\"shortBreak\""
        );
        assert_eq!(serde_json::to_string(&Mode::Focus).unwrap(), "\"focus\"");
    }
}
