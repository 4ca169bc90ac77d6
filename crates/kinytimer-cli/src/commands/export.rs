use std::path::PathBuf;

use chrono::Utc;
use kinytimer_core::{ExportSnapshot, SessionStore, Store};

pub fn run(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let projects = store.load_projects()?;
    let sessions = store.load_sessions()?;

    let snapshot = ExportSnapshot::build(projects, sessions, Utc::now());
    let path = output.unwrap_or_else(|| PathBuf::from(snapshot.file_name()));
    std::fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
    println!("Exported to {}", path.display());
    Ok(())
}
