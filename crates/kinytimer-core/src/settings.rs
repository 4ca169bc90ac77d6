//! User preference record.
//!
//! Settings are persisted as one JSON document in the key-value store.
//! Phase lengths here are informational only: the timer engine runs on its
//! fixed constants and does not consult them.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Focus phase length in minutes.
    #[serde(default = "default_pomodoro_time")]
    pub pomodoro_time: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break_time")]
    pub short_break_time: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break_time")]
    pub long_break_time: u32,
    #[serde(default = "default_true")]
    pub enable_sounds: bool,
    #[serde(default)]
    pub auto_start_breaks: bool,
}

fn default_pomodoro_time() -> u32 {
    25
}
fn default_short_break_time() -> u32 {
    5
}
fn default_long_break_time() -> u32 {
    15
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_time: default_pomodoro_time(),
            short_break_time: default_short_break_time(),
            long_break_time: default_long_break_time(),
            enable_sounds: true,
            auto_start_breaks: false,
        }
    }
}

impl Settings {
    /// Get a settings value as a string by field name.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a settings value by field name, parsing the string against the
    /// field's current type. Unknown keys are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ValidationError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ValidationError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| ValidationError::InvalidValue {
                key: key.to_string(),
                message: "settings record is not an object".to_string(),
            })?;
        let existing = obj
            .get(key)
            .ok_or_else(|| ValidationError::UnknownKey(key.to_string()))?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>().map_err(
                |_| ValidationError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as bool"),
                },
            )?),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| ValidationError::InvalidValue {
                        key: key.to_string(),
                        message: format!("cannot parse '{value}' as number"),
                    })?;
                serde_json::Value::Number(n.into())
            }
            _ => serde_json::Value::String(value.into()),
        };

        obj.insert(key.to_string(), new_value);
        *self = serde_json::from_value(json).map_err(|e| ValidationError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.pomodoro_time, 25);
        assert_eq!(s.short_break_time, 5);
        assert_eq!(s.long_break_time, 15);
        assert!(s.enable_sounds);
        assert!(!s.auto_start_breaks);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn get_returns_string_for_all_types() {
        let s = Settings::default();
        assert_eq!(s.get("pomodoro_time").as_deref(), Some("25"));
        assert_eq!(s.get("enable_sounds").as_deref(), Some("true"));
        assert!(s.get("missing_key").is_none());
    }

    #[test]
    fn set_updates_number_and_bool() {
        let mut s = Settings::default();
        s.set("short_break_time", "10").unwrap();
        assert_eq!(s.short_break_time, 10);
        s.set("auto_start_breaks", "true").unwrap();
        assert!(s.auto_start_breaks);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut s = Settings::default();
        assert!(matches!(
            s.set("nonexistent", "1"),
            Err(ValidationError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_invalid_value() {
        let mut s = Settings::default();
        assert!(s.set("pomodoro_time", "not_a_number").is_err());
        assert!(s.set("enable_sounds", "maybe").is_err());
    }
}
