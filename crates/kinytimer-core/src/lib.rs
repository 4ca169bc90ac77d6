//! # KinyTimer Core Library
//!
//! Core business logic for KinyTimer, a Pomodoro-style productivity timer
//! with project tracking. The CLI/TUI binary is a thin presentation layer
//! over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a second-granularity state machine; the caller
//!   invokes `tick()` once per elapsed second
//! - **Storage**: SQLite-backed key-value records for projects, sessions,
//!   project selection, and settings
//! - **Stats**: pure aggregate functions over the session history
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: core timer state machine
//! - [`Store`]: durable key-value persistence
//! - [`stats`]: dashboard aggregates (summary, breakdown, heatmap)
//! - [`ExportSnapshot`]: one-way data export

pub mod error;
pub mod events;
pub mod export;
pub mod session;
pub mod settings;
pub mod stats;
pub mod storage;
pub mod timer;

pub use error::{CoreError, StoreError, ValidationError};
pub use events::Event;
pub use export::ExportSnapshot;
pub use session::{Project, Session, SessionKind};
pub use settings::Settings;
pub use storage::{SessionStore, Store};
pub use timer::{Clock, Mode, SystemClock, TimerEngine, TimerState};
