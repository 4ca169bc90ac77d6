//! SQLite-backed key-value store.
//!
//! Four independent records live in one `kv` table, each a JSON document:
//! - `projects`: ordered project list
//! - `sessions`: ordered closed-session history
//! - `current_project`: selected project id
//! - `settings`: user preferences
//!
//! Reads are permissive: a missing or unreadable record degrades to an
//! empty/default value with a warning, never a fatal error. Another
//! process mutating the database concurrently is undetected; the last
//! writer wins.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{data_dir, SessionStore};
use crate::error::StoreError;
use crate::session::{Project, Session};
use crate::settings::Settings;

const KEY_PROJECTS: &str = "projects";
const KEY_SESSIONS: &str = "sessions";
const KEY_CURRENT_PROJECT: &str = "current_project";
const KEY_SETTINGS: &str = "settings";

/// Durable key-value store for projects, sessions, selection, and settings.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `<data dir>/kinytimer.db`, creating the schema if
    /// needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()?.join("kinytimer.db");
        let conn = Connection::open(&path).map_err(|source| StoreError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Read a JSON record, falling back to the default on a missing or
    /// unreadable value.
    fn read_record<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, StoreError> {
        match self.kv_get(key)? {
            None => Ok(T::default()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    eprintln!("Warning: discarding unreadable '{key}' record: {e}");
                    Ok(T::default())
                }
            },
        }
    }

    fn write_record<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::QueryFailed(format!("serialize '{key}': {e}")))?;
        self.kv_set(key, &raw)
    }

    // ── Records ──────────────────────────────────────────────────────

    pub fn load_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.read_record(KEY_PROJECTS)
    }

    pub fn save_projects(&self, projects: &[Project]) -> Result<(), StoreError> {
        self.write_record(KEY_PROJECTS, &projects)
    }

    /// Selected project id, or None if nothing has been selected.
    pub fn selected_project(&self) -> Result<Option<String>, StoreError> {
        self.kv_get(KEY_CURRENT_PROJECT)
    }

    pub fn set_selected_project(&self, project_id: &str) -> Result<(), StoreError> {
        self.kv_set(KEY_CURRENT_PROJECT, project_id)
    }

    pub fn load_settings(&self) -> Result<Settings, StoreError> {
        self.read_record(KEY_SETTINGS)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.write_record(KEY_SETTINGS, settings)
    }
}

impl SessionStore for Store {
    fn load_sessions(&self) -> Result<Vec<Session>, StoreError> {
        self.read_record(KEY_SESSIONS)
    }

    fn save_sessions(&self, sessions: &[Session]) -> Result<(), StoreError> {
        self.write_record(KEY_SESSIONS, &sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_sessions() -> Vec<Session> {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        (0..3)
            .map(|i| {
                let mut s = Session::open(format!("p-{i}"), start + chrono::Duration::hours(i));
                s.close(start + chrono::Duration::hours(i) + chrono::Duration::seconds(600 + i));
                s
            })
            .collect()
    }

    #[test]
    fn session_round_trip_preserves_order_and_fields() {
        let store = Store::open_memory().unwrap();
        let sessions = sample_sessions();
        store.save_sessions(&sessions).unwrap();

        let loaded = store.load_sessions().unwrap();
        assert_eq!(loaded.len(), sessions.len());
        for (a, b) in loaded.iter().zip(&sessions) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.started_at, b.started_at);
            assert_eq!(a.ended_at, b.ended_at);
            assert_eq!(a.duration_secs, b.duration_secs);
        }
    }

    #[test]
    fn missing_records_load_as_empty() {
        let store = Store::open_memory().unwrap();
        assert!(store.load_sessions().unwrap().is_empty());
        assert!(store.load_projects().unwrap().is_empty());
        assert!(store.selected_project().unwrap().is_none());
        assert_eq!(store.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn corrupt_records_degrade_to_defaults() {
        let store = Store::open_memory().unwrap();
        store.kv_set(KEY_SESSIONS, "{not json").unwrap();
        store.kv_set(KEY_PROJECTS, "42").unwrap();
        store.kv_set(KEY_SETTINGS, "[]").unwrap();

        assert!(store.load_sessions().unwrap().is_empty());
        assert!(store.load_projects().unwrap().is_empty());
        assert_eq!(store.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn projects_and_selection_round_trip() {
        let store = Store::open_memory().unwrap();
        let project = Project::new("Website", "#EF4444", Utc::now());
        store.save_projects(std::slice::from_ref(&project)).unwrap();
        store.set_selected_project(&project.id).unwrap();

        let loaded = store.load_projects().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Website");
        assert_eq!(store.selected_project().unwrap().as_deref(), Some(project.id.as_str()));
    }

    #[test]
    fn settings_round_trip() {
        let store = Store::open_memory().unwrap();
        let mut settings = Settings::default();
        settings.pomodoro_time = 50;
        settings.auto_start_breaks = true;
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings().unwrap(), settings);
    }

    #[test]
    fn save_overwrites_the_whole_collection() {
        let store = Store::open_memory().unwrap();
        store.save_sessions(&sample_sessions()).unwrap();
        store.save_sessions(&[]).unwrap();
        assert!(store.load_sessions().unwrap().is_empty());
    }
}
