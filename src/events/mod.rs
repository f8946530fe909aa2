//! Event handling module.
//!
//! This module contains the network event types and the handler that applies
//! them: remote task API interactions and the resynchronizing refresh that
//! follows every successful mutation.

pub mod network;
