//! One-way export snapshot.
//!
//! Bundles the full history, project list, and computed stats into a
//! single serializable document. Not a re-importable format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::{Project, Session};
use crate::stats::{self, Summary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub sessions: Vec<Session>,
    pub projects: Vec<Project>,
    pub stats: Summary,
    pub exported_at: DateTime<Utc>,
}

impl ExportSnapshot {
    pub fn build(projects: Vec<Project>, sessions: Vec<Session>, now: DateTime<Utc>) -> Self {
        let stats = stats::summary(&sessions, now);
        Self {
            sessions,
            projects,
            stats,
            exported_at: now,
        }
    }

    /// Default export file name, `kinytimer-export-YYYY-MM-DD.json`.
    pub fn file_name(&self) -> String {
        format!(
            "kinytimer-export-{}.json",
            self.exported_at.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn build_computes_stats_and_file_name() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let project = Project::new("Website", "#EF4444", now);
        let mut session = Session::open(&project.id, now - chrono::Duration::hours(1));
        session.close(now - chrono::Duration::hours(1) + chrono::Duration::seconds(1500));

        let snapshot = ExportSnapshot::build(vec![project], vec![session], now);
        assert_eq!(snapshot.stats.total_secs, 1500);
        assert_eq!(snapshot.file_name(), "kinytimer-export-2025-03-10.json");

        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let decoded: ExportSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.sessions.len(), 1);
        assert_eq!(decoded.projects.len(), 1);
    }
}
