mod store;

pub use store::Store;

use std::path::PathBuf;

use crate::error::StoreError;
use crate::session::Session;

/// Persistence seam consumed by the timer engine.
///
/// Save uses whole-collection overwrite semantics: callers pass the full
/// ordered history, not an increment.
pub trait SessionStore {
    fn load_sessions(&self) -> Result<Vec<Session>, StoreError>;
    fn save_sessions(&self, sessions: &[Session]) -> Result<(), StoreError>;
}

/// Returns `~/.config/kinytimer[-dev]/` based on KINYTIMER_ENV.
///
/// Set KINYTIMER_ENV=dev to use the development data directory, or
/// KINYTIMER_DATA_DIR to override the location outright (used by tests
/// and scripting).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let dir = if let Ok(override_dir) = std::env::var("KINYTIMER_DATA_DIR") {
        PathBuf::from(override_dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("KINYTIMER_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("kinytimer-dev")
        } else {
            base_dir.join("kinytimer")
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
