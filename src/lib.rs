//! Client-side synchronization engine for a remote task manager API.
//!
//! The engine keeps an in-memory task snapshot in sync with a CRUD
//! collection resource: mutations (create, update, delete, complete) are
//! dispatched as network events, applied against the server, and followed by
//! a full refetch so local state always reflects server truth. The completed
//! subset is derived from the snapshot whenever it changes, and every
//! operation outcome is surfaced through a pluggable [`notify::Notifier`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use tasksync::{App, Config, MemoryNotifier};
//! use tasksync::Event;
//!
//! # fn main() -> anyhow::Result<()> {
//! let notifier = Arc::new(MemoryNotifier::new());
//! let mut config = Config::new();
//! config.load(None)?;
//! let app = App::start(config, notifier.clone())?;
//!
//! // Front-end code reads state and dispatches events:
//! app.sender().send(Event::DeleteTask { id: "42".to_string() })?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod notify;
pub mod state;

pub use api::{Task, TaskDraft, TaskService};
pub use app::{App, NetworkEventSender};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use events::network::Event;
pub use notify::{LogNotifier, MemoryNotifier, Notice, Notifier, Severity};
pub use state::{completed_subset, Draft, EditSession, State, StateError};
