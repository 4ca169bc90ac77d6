//! Dashboard aggregates computed from the session history.
//!
//! Everything here is a pure function over closed sessions; `now`/`today`
//! are explicit parameters so results are deterministic. Day boundaries
//! are UTC.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::session::{Project, Session};

/// Number of days covered by the activity heatmap.
pub const HEATMAP_DAYS: usize = 365;

/// Headline totals for the dashboard cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub today_secs: u64,
    pub today_sessions: u64,
    /// Trailing 7 x 24h window ending at `now`.
    pub week_secs: u64,
    pub total_secs: u64,
    pub total_sessions: u64,
    pub avg_session_secs: u64,
}

/// Per-project share of the tracked time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStats {
    pub id: String,
    pub name: String,
    pub color: String,
    pub sessions: u64,
    pub total_secs: u64,
    /// Share of lifetime tracked seconds, 0.0 .. 100.0.
    pub percentage: f64,
}

/// One cell of the trailing-365-day activity heatmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayStats {
    pub date: NaiveDate,
    pub total_secs: u64,
    pub sessions: u64,
    /// Distinct project ids active that day.
    pub projects: Vec<String>,
}

pub fn summary(sessions: &[Session], now: DateTime<Utc>) -> Summary {
    let today = now.date_naive();
    let week_start = now - Duration::days(7);

    let mut out = Summary::default();
    for session in sessions {
        out.total_secs += session.duration_secs;
        out.total_sessions += 1;
        if session.started_at.date_naive() == today {
            out.today_secs += session.duration_secs;
            out.today_sessions += 1;
        }
        if session.started_at >= week_start {
            out.week_secs += session.duration_secs;
        }
    }
    if out.total_sessions > 0 {
        out.avg_session_secs = out.total_secs / out.total_sessions;
    }
    out
}

/// Totals for one calendar day.
pub fn day(sessions: &[Session], date: NaiveDate) -> DayStats {
    let mut out = DayStats {
        date,
        total_secs: 0,
        sessions: 0,
        projects: Vec::new(),
    };
    for session in sessions {
        if session.started_at.date_naive() != date {
            continue;
        }
        out.total_secs += session.duration_secs;
        out.sessions += 1;
        if !out.projects.contains(&session.project_id) {
            out.projects.push(session.project_id.clone());
        }
    }
    out
}

/// Per-project totals and percentages, sorted by tracked time descending.
pub fn project_breakdown(projects: &[Project], sessions: &[Session]) -> Vec<ProjectStats> {
    let grand_total: u64 = sessions.iter().map(|s| s.duration_secs).sum();

    let mut out: Vec<ProjectStats> = projects
        .iter()
        .map(|project| {
            let mut total_secs = 0u64;
            let mut count = 0u64;
            for session in sessions.iter().filter(|s| s.project_id == project.id) {
                total_secs += session.duration_secs;
                count += 1;
            }
            ProjectStats {
                id: project.id.clone(),
                name: project.name.clone(),
                color: project.color.clone(),
                sessions: count,
                total_secs,
                percentage: if grand_total > 0 {
                    total_secs as f64 / grand_total as f64 * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect();

    out.sort_by(|a, b| b.total_secs.cmp(&a.total_secs));
    out
}

/// Trailing 365-day activity, oldest day first, ending at `today`.
/// Sessions outside the window are ignored.
pub fn heatmap(sessions: &[Session], today: NaiveDate) -> Vec<DayStats> {
    let mut days: Vec<DayStats> = (0..HEATMAP_DAYS)
        .map(|i| DayStats {
            date: today - Duration::days((HEATMAP_DAYS - 1 - i) as i64),
            total_secs: 0,
            sessions: 0,
            projects: Vec::new(),
        })
        .collect();
    let first = days[0].date;

    for session in sessions {
        let date = session.started_at.date_naive();
        if date < first || date > today {
            continue;
        }
        let index = (date - first).num_days() as usize;
        let day = &mut days[index];
        day.total_secs += session.duration_secs;
        day.sessions += 1;
        if !day.projects.contains(&session.project_id) {
            day.projects.push(session.project_id.clone());
        }
    }
    days
}

/// `H:MM:SS` above an hour, `M:SS` below.
pub fn format_duration(secs: u64) -> String {
    let hrs = secs / 3600;
    let mins = (secs % 3600) / 60;
    let rest = secs % 60;
    if hrs > 0 {
        format!("{hrs}:{mins:02}:{rest:02}")
    } else {
        format!("{mins}:{rest:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn closed(project_id: &str, start: DateTime<Utc>, secs: i64) -> Session {
        let mut s = Session::open(project_id, start);
        s.close(start + Duration::seconds(secs));
        s
    }

    fn fixture_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn summary_splits_today_week_and_lifetime() {
        let now = fixture_now();
        let sessions = vec![
            closed("a", now - Duration::hours(2), 1500),       // today
            closed("a", now - Duration::days(3), 600),         // this week
            closed("b", now - Duration::days(30), 900),        // older
        ];

        let s = summary(&sessions, now);
        assert_eq!(s.today_secs, 1500);
        assert_eq!(s.today_sessions, 1);
        assert_eq!(s.week_secs, 2100);
        assert_eq!(s.total_secs, 3000);
        assert_eq!(s.total_sessions, 3);
        assert_eq!(s.avg_session_secs, 1000);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let s = summary(&[], fixture_now());
        assert_eq!(s.total_sessions, 0);
        assert_eq!(s.avg_session_secs, 0);
    }

    #[test]
    fn breakdown_sorts_by_time_and_computes_share() {
        let now = fixture_now();
        let projects = vec![
            Project::new("Small", "#111111", now),
            Project::new("Big", "#222222", now),
        ];
        let sessions = vec![
            closed(&projects[0].id, now - Duration::hours(5), 900),
            closed(&projects[1].id, now - Duration::hours(4), 1800),
            closed(&projects[1].id, now - Duration::hours(3), 900),
        ];

        let breakdown = project_breakdown(&projects, &sessions);
        assert_eq!(breakdown[0].name, "Big");
        assert_eq!(breakdown[0].sessions, 2);
        assert_eq!(breakdown[0].total_secs, 2700);
        assert!((breakdown[0].percentage - 75.0).abs() < 1e-9);
        assert!((breakdown[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_without_sessions_has_zero_percentages() {
        let now = fixture_now();
        let projects = vec![Project::new("Idle", "#333333", now)];
        let breakdown = project_breakdown(&projects, &[]);
        assert_eq!(breakdown[0].percentage, 0.0);
        assert_eq!(breakdown[0].total_secs, 0);
    }

    #[test]
    fn heatmap_covers_exactly_365_days_ending_today() {
        let today = fixture_now().date_naive();
        let days = heatmap(&[], today);
        assert_eq!(days.len(), HEATMAP_DAYS);
        assert_eq!(days.last().unwrap().date, today);
        assert_eq!(days[0].date, today - Duration::days(364));
    }

    #[test]
    fn heatmap_buckets_sessions_and_distinct_projects() {
        let now = fixture_now();
        let today = now.date_naive();
        let sessions = vec![
            closed("a", now - Duration::hours(1), 1500),
            closed("a", now - Duration::hours(2), 300),
            closed("b", now - Duration::hours(3), 600),
            closed("a", now - Duration::days(400), 999), // outside window
        ];

        let days = heatmap(&sessions, today);
        let last = days.last().unwrap();
        assert_eq!(last.total_secs, 2400);
        assert_eq!(last.sessions, 3);
        assert_eq!(last.projects.len(), 2);
        let total: u64 = days.iter().map(|d| d.total_secs).sum();
        assert_eq!(total, 2400);
    }

    #[test]
    fn day_totals_single_date() {
        let now = fixture_now();
        let sessions = vec![
            closed("a", now - Duration::hours(1), 1500),
            closed("b", now - Duration::days(1), 600),
        ];
        let stats = day(&sessions, now.date_naive());
        assert_eq!(stats.total_secs, 1500);
        assert_eq!(stats.sessions, 1);
        assert_eq!(stats.projects, vec!["a".to_string()]);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(1500), "25:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }
}
