use chrono::Utc;
use clap::Subcommand;
use kinytimer_core::{stats, SessionStore, Store};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Today's totals
    Today,
    /// Lifetime summary
    All,
    /// Per-project breakdown
    Projects,
    /// Trailing 365-day activity heatmap
    Heatmap,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let sessions = store.load_sessions()?;

    match action {
        StatsAction::Today => {
            let day = stats::day(&sessions, Utc::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&day)?);
        }
        StatsAction::All => {
            let summary = stats::summary(&sessions, Utc::now());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Projects => {
            let projects = store.load_projects()?;
            let breakdown = stats::project_breakdown(&projects, &sessions);
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        StatsAction::Heatmap => {
            let days = stats::heatmap(&sessions, Utc::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
    }
    Ok(())
}
