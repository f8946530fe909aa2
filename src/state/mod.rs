//! Synchronization state management module.
//!
//! This module contains the core state management for the engine, including:
//! - The `State` container holding the task snapshot and derived data
//! - Form draft and edit-session types
//! - State error handling

mod error;
mod form;
mod store;

pub use error::StateError;
pub use form::{Draft, EditSession};
pub use store::{completed_subset, State};
