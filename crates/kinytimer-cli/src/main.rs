use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod app;
mod commands;
mod input;
mod ui;

#[derive(Parser)]
#[command(
    name = "kinytimer",
    version,
    about = "Pomodoro timer with project tracking. Run without arguments for the interactive timer."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project management
    Project {
        #[command(subcommand)]
        action: commands::project::ProjectAction,
    },
    /// Session statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// User preferences
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Write a JSON snapshot of sessions, projects, and stats
    Export {
        /// Output path, defaults to ./kinytimer-export-YYYY-MM-DD.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        None => app::run(),
        Some(Commands::Project { action }) => commands::project::run(action),
        Some(Commands::Stats { action }) => commands::stats::run(action),
        Some(Commands::Settings { action }) => commands::settings::run(action),
        Some(Commands::Export { output }) => commands::export::run(output),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
