//! Interactive terminal application: state, tick driver, and event loop.
//!
//! The engine is strictly second-granularity; this module is the thin
//! scheduling layer around it. The loop polls the terminal every 250 ms
//! and feeds the engine one `tick()` per whole elapsed second. Pause and
//! stop clear the tick accumulator so a partially elapsed second never
//! fires afterward.

use std::io;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kinytimer_core::{Project, Store, TimerEngine};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::input;
use crate::ui::{self, styles};

const POLL_MS: u64 = 250;

/// Seeded on first run so the timer is usable immediately.
const DEFAULT_PROJECT_NAME: &str = "Default Project";
const DEFAULT_PROJECT_COLOR: &str = "#8B5CF6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Timer,
    Dashboard,
}

/// Draft state for the add-project form.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub name: String,
    pub repo: String,
    pub branch: String,
    pub color_index: usize,
    /// 0 = name, 1 = repo, 2 = branch
    pub editing_field: usize,
}

impl ProjectForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            repo: String::new(),
            branch: "main".to_string(),
            color_index: 0,
            editing_field: 0,
        }
    }
}

/// Main application state.
pub struct App {
    pub store: Store,
    pub engine: TimerEngine,
    pub projects: Vec<Project>,
    pub selected_index: usize,
    pub view: View,
    pub zen: bool,
    pub show_help: bool,
    pub form: Option<ProjectForm>,
    pub status: Option<String>,
    /// Last whole-second boundary consumed by the tick driver.
    last_tick: Option<Instant>,
}

impl App {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let store = Store::open()?;

        let mut projects = store.load_projects()?;
        if projects.is_empty() {
            let default = Project::new(DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_COLOR, Utc::now());
            store.set_selected_project(&default.id)?;
            projects.push(default);
            store.save_projects(&projects)?;
        }

        let selected_index = store
            .selected_project()?
            .and_then(|id| projects.iter().position(|p| p.id == id))
            .unwrap_or(0);

        // The engine gets its own store handle for session persistence.
        let mut engine = TimerEngine::new(Box::new(Store::open()?))?;
        engine.set_project(Some(projects[selected_index].clone()));

        Ok(Self {
            store,
            engine,
            projects,
            selected_index,
            view: View::Timer,
            zen: false,
            show_help: false,
            form: None,
            status: None,
            last_tick: None,
        })
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected_index)
    }

    // ── Timer commands ───────────────────────────────────────────────

    pub fn toggle_start_pause(&mut self) {
        let state = *self.engine.state();
        if state.is_running && !state.is_paused {
            self.engine.pause();
            self.last_tick = None;
        } else {
            self.engine.start();
        }
    }

    pub fn stop_timer(&mut self) {
        self.last_tick = None;
        if let Err(e) = self.engine.stop() {
            self.status = Some(format!("save failed: {e}"));
        }
    }

    pub fn reset_timer(&mut self) {
        self.last_tick = None;
        if let Err(e) = self.engine.reset() {
            self.status = Some(format!("save failed: {e}"));
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Timer => View::Dashboard,
            View::Dashboard => View::Timer,
        };
    }

    // ── Project selection ────────────────────────────────────────────

    pub fn select_offset(&mut self, delta: isize) {
        if self.projects.is_empty() {
            return;
        }
        let len = self.projects.len() as isize;
        let next = (self.selected_index as isize + delta).rem_euclid(len) as usize;
        self.select_index(next);
    }

    fn select_index(&mut self, index: usize) {
        self.selected_index = index;
        let project = self.projects[index].clone();
        if let Err(e) = self.store.set_selected_project(&project.id) {
            self.status = Some(format!("save failed: {e}"));
        }
        self.engine.set_project(Some(project));
    }

    // ── Add-project form ─────────────────────────────────────────────

    pub fn open_form(&mut self) {
        self.form = Some(ProjectForm::new());
    }

    /// Validate and create the drafted project. An empty name keeps the
    /// form open; there is no error dialog.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        let name = form.name.trim();
        if name.is_empty() {
            self.form = Some(form);
            return;
        }

        let mut project = Project::new(name, styles::PALETTE[form.color_index], Utc::now());
        let repo = form.repo.trim();
        if !repo.is_empty() {
            project.repo = Some(repo.to_string());
            let branch = form.branch.trim();
            project.branch = Some(if branch.is_empty() { "main" } else { branch }.to_string());
        }

        self.projects.push(project);
        if let Err(e) = self.store.save_projects(&self.projects) {
            self.status = Some(format!("save failed: {e}"));
        }
        self.select_index(self.projects.len() - 1);
    }

    // ── Tick driver ──────────────────────────────────────────────────

    /// Feed the engine one tick per whole elapsed second while the
    /// countdown is active. Partial seconds carry over to the next poll.
    pub fn on_tick(&mut self) {
        let state = self.engine.state();
        if !state.is_running || state.is_paused {
            self.last_tick = None;
            return;
        }

        let now = Instant::now();
        let mut boundary = *self.last_tick.get_or_insert(now);
        while now.duration_since(boundary) >= Duration::from_secs(1) {
            boundary += Duration::from_secs(1);
            match self.engine.tick() {
                Ok(_) => {}
                Err(e) => self.status = Some(format!("save failed: {e}")),
            }
            // Phase completion leaves the new phase stopped.
            if !self.engine.state().is_running {
                self.last_tick = None;
                return;
            }
        }
        self.last_tick = Some(boundary);
    }

    /// Close any open session before exit; open sessions are never
    /// persisted mid-flight.
    fn close_open_session(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if self.engine.open_session().is_some() {
            self.engine.stop()?;
        }
        Ok(())
    }
}

/// Run the interactive terminal application.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.close_open_session() {
        eprintln!("Error saving session: {e}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    return Ok(());
                }
            }
        }

        app.on_tick();
    }
}
