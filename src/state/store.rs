//! Shared state container for the synchronization engine.
//!
//! The container is the single place front-end code reads from and the only
//! place the network handler writes to. The task collection held here is
//! always the full, unfiltered snapshot of the last successful fetch; the
//! completed subset is recomputed from it on every replacement and never
//! mutated independently.

use crate::api::Task;
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use log::*;

use super::form::{Draft, EditSession};

/// Returns the completed subset of the given collection.
///
/// Pure and total over its input; [`State::set_tasks`] invokes it
/// synchronously whenever the snapshot changes, and tests may call it
/// directly.
///
pub fn completed_subset(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|task| task.completed).cloned().collect()
}

/// Houses data representative of synchronization state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    tasks: Vec<Task>,
    completed_tasks: Vec<Task>,
    is_loading: bool,
    draft: Draft,
    edit_session: EditSession,
    pending_mutation: bool,
}

/// Defines default synchronization state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            tasks: vec![],
            completed_tasks: vec![],
            is_loading: false,
            draft: Draft::default(),
            edit_session: EditSession::Inactive,
            pending_mutation: false,
        }
    }
}

impl State {
    /// Return new instance wired to the network event channel.
    ///
    pub fn new(net_sender: NetworkEventSender) -> State {
        State {
            net_sender: Some(net_sender),
            ..State::default()
        }
    }

    /// Return the full task snapshot from the last successful fetch.
    ///
    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the task snapshot and recompute the derived completed subset.
    ///
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.tasks = tasks;
        self.completed_tasks = completed_subset(&self.tasks);
        self
    }

    /// Return the derived completed subset of the snapshot.
    ///
    pub fn get_completed_tasks(&self) -> &[Task] {
        &self.completed_tasks
    }

    /// Return the task with the given identifier from the snapshot, if any.
    ///
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) -> &mut Self {
        self.is_loading = loading;
        self
    }

    pub fn get_draft(&self) -> &Draft {
        &self.draft
    }

    /// Update the draft name as the user types.
    ///
    pub fn set_draft_name(&mut self, name: String) -> &mut Self {
        self.draft.name = name;
        self
    }

    pub fn get_edit_session(&self) -> &EditSession {
        &self.edit_session
    }

    pub fn is_editing(&self) -> bool {
        self.edit_session.is_editing()
    }

    /// Begin editing the given task: copy its name into the draft and record
    /// it as the edit target. The draft's completed flag is forced to false
    /// because the edit form only edits the name; the server record keeps
    /// its flag until the update is submitted.
    ///
    pub fn begin_edit(&mut self, task: &Task) -> &mut Self {
        debug!("Entering edit session for task {}.", task.id);
        self.draft = Draft {
            name: task.name.clone(),
            completed: false,
        };
        self.edit_session = EditSession::Active {
            target: task.id.clone(),
        };
        self
    }

    /// End any edit session and clear the draft without submitting.
    ///
    pub fn cancel_edit(&mut self) -> &mut Self {
        self.reset_draft()
    }

    /// Clear the draft and end any edit session. Called after every
    /// successful create or update.
    ///
    pub fn reset_draft(&mut self) -> &mut Self {
        self.draft = Draft::default();
        self.edit_session = EditSession::Inactive;
        self
    }

    pub fn mutation_pending(&self) -> bool {
        self.pending_mutation
    }

    /// Mark the outstanding mutation as settled, reopening the dispatch gate.
    /// Called by the network handler once a mutation finishes, whether it
    /// succeeded, failed, or was rejected by validation.
    ///
    pub fn clear_pending_mutation(&mut self) -> &mut Self {
        self.pending_mutation = false;
        self
    }

    /// Send a network event to the handler thread. Mutation events are
    /// dropped while a previous mutation is still outstanding, so rapid
    /// repeated submissions collapse into one request.
    ///
    pub fn dispatch(&mut self, event: NetworkEvent) {
        if event.is_mutation() {
            if self.pending_mutation {
                debug!(
                    "Dropping '{:?}' while another mutation is in flight.",
                    event
                );
                return;
            }
            self.pending_mutation = true;
        }
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to send network event: {}", e);
                }
            }
            None => warn!("No network event sender set; dropping '{:?}'.", event),
        }
    }
}
