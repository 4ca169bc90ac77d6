//! Project management commands.

use chrono::Utc;
use clap::Subcommand;
use kinytimer_core::error::ValidationError;
use kinytimer_core::{Project, Store};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Create {
        /// Project name
        name: String,
        /// Display color as a hex tag
        #[arg(long, default_value = "#EF4444")]
        color: String,
        /// Repository URL, purely informational
        #[arg(long)]
        repo: Option<String>,
        /// Branch name shown next to the repository
        #[arg(long)]
        branch: Option<String>,
    },
    /// List all projects
    List,
    /// Select the project new sessions are booked against
    Select {
        /// Project id
        id: String,
    },
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        ProjectAction::Create {
            name,
            color,
            repo,
            branch,
        } => {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyProjectName.into());
            }
            let mut project = Project::new(name.trim(), color, Utc::now());
            project.repo = repo;
            project.branch = branch;

            let mut projects = store.load_projects()?;
            projects.push(project.clone());
            store.save_projects(&projects)?;
            // First project created becomes the selection.
            if projects.len() == 1 {
                store.set_selected_project(&project.id)?;
            }
            println!("Project created: {}", project.id);
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
        ProjectAction::List => {
            let projects = store.load_projects()?;
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
        ProjectAction::Select { id } => {
            let projects = store.load_projects()?;
            if !projects.iter().any(|p| p.id == id) {
                return Err(ValidationError::UnknownProject(id).into());
            }
            store.set_selected_project(&id)?;
            println!("ok");
        }
    }
    Ok(())
}
