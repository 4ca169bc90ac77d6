//! Projects and work sessions.
//!
//! A [`Session`] is one continuous period of engagement with a project.
//! Sessions are opened by the timer engine when a focus phase starts and
//! closed (end timestamp + computed duration) when the phase completes or
//! the user stops the timer. Only closed sessions are ever persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project that work sessions are booked against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Hex display color, e.g. `#EF4444`.
    pub color: String,
    /// Optional repository URL, purely informational.
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    /// Cumulative tracked seconds. Maintained at the boundary, not by the
    /// engine; dashboard totals are computed from sessions instead.
    #[serde(default)]
    pub total_secs: u64,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a new project with a fresh id and zeroed totals.
    pub fn new(name: impl Into<String>, color: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color: color.into(),
            repo: None,
            branch: None,
            total_secs: 0,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Work,
    Break,
    Pomodoro,
}

/// One tracked period of work against a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub project_id: String,
    pub started_at: DateTime<Utc>,
    /// Absent while the session is open.
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Whole elapsed seconds between start and end; 0 while open.
    pub duration_secs: u64,
    pub kind: SessionKind,
    #[serde(default)]
    pub note: Option<String>,
}

impl Session {
    /// Open a new work session starting now.
    pub fn open(project_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.into(),
            started_at: now,
            ended_at: None,
            duration_secs: 0,
            kind: SessionKind::Work,
            note: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Close the session: set the end timestamp and compute the duration as
    /// whole elapsed wall-clock seconds, clamped non-negative.
    pub fn close(&mut self, now: DateTime<Utc>) {
        self.ended_at = Some(now);
        self.duration_secs = (now - self.started_at).num_seconds().max(0) as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn close_computes_whole_seconds() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let mut session = Session::open("p-1", start);
        assert!(session.is_open());
        assert_eq!(session.duration_secs, 0);

        session.close(start + chrono::Duration::seconds(1500));
        assert!(!session.is_open());
        assert_eq!(session.duration_secs, 1500);
        assert!(session.ended_at.unwrap() >= session.started_at);
    }

    #[test]
    fn close_clamps_negative_elapsed_to_zero() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let mut session = Session::open("p-1", start);
        session.close(start - chrono::Duration::seconds(5));
        assert_eq!(session.duration_secs, 0);
    }

    #[test]
    fn session_serialization() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let mut session = Session::open("p-1", start);
        session.close(start + chrono::Duration::seconds(60));

        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"kind\":\"work\""));
        let decoded: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, session.id);
        assert_eq!(decoded.duration_secs, 60);
    }

    #[test]
    fn project_new_zeroes_totals() {
        let project = Project::new("Website", "#EF4444", Utc::now());
        assert_eq!(project.total_secs, 0);
        assert!(project.repo.is_none());
        assert!(!project.id.is_empty());
    }
}
