use crate::api::{TaskDraft, TaskService};
use crate::notify::Notifier;
use crate::state::{State, StateError};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Replace the local task snapshot with server state.
    Refresh,
    /// Submit the current draft as a new task.
    CreateTask,
    /// Submit the current draft as a full replacement of the edit target.
    UpdateTask,
    /// Delete the task with the given identifier.
    DeleteTask { id: String },
    /// Mark the task with the given identifier completed, preserving its name.
    CompleteTask { id: String },
}

impl Event {
    /// Whether the event mutates the remote collection. Mutations are gated
    /// by the dispatch-side in-flight guard in [`State::dispatch`].
    ///
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Event::Refresh)
    }
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    service: &'a TaskService,
    notifier: &'a dyn Notifier,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        service: &'a TaskService,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Handler {
            state,
            service,
            notifier,
        }
    }

    /// Handle network events by type. Mutation events reopen the dispatch
    /// gate once they settle, whatever the outcome.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        let is_mutation = event.is_mutation();
        let result = match event {
            Event::Refresh => self.refresh().await,
            Event::CreateTask => self.create_task().await,
            Event::UpdateTask => self.update_task().await,
            Event::DeleteTask { id } => self.delete_task(id).await,
            Event::CompleteTask { id } => self.complete_task(id).await,
        };
        if is_mutation {
            self.state.lock().await.clear_pending_mutation();
        }
        result
    }

    /// Replace the task snapshot with server state. On failure the previous
    /// snapshot is left intact and the error is surfaced to the user.
    ///
    async fn refresh(&mut self) -> Result<()> {
        info!("Fetching task collection...");
        {
            self.state.lock().await.set_loading(true);
        }
        match self.service.list().await {
            Ok(tasks) => {
                info!("Received {} tasks.", tasks.len());
                let mut state = self.state.lock().await;
                state.set_tasks(tasks);
                state.set_loading(false);
            }
            Err(e) => {
                error!("Failed to fetch tasks: {}", e);
                self.state.lock().await.set_loading(false);
                self.notifier.error(&e.to_string());
            }
        }
        Ok(())
    }

    /// Submit the draft as a new task, then clear the draft and refresh.
    ///
    async fn create_task(&mut self) -> Result<()> {
        let draft = { self.state.lock().await.get_draft().clone() };
        if draft.is_blank() {
            warn!("Rejecting create request for empty task name.");
            self.notifier.error(&StateError::EmptyName.to_string());
            return Ok(());
        }

        info!("Creating task '{}'...", draft.name);
        let payload = TaskDraft {
            name: draft.name,
            completed: draft.completed,
        };
        match self.service.create(&payload).await {
            Ok(task) => {
                info!("Created task {}.", task.id);
                self.notifier.success("Task added successfully");
                {
                    self.state.lock().await.reset_draft();
                }
                self.refresh().await?;
            }
            Err(e) => {
                // Draft stays intact so the user can retry
                error!("Failed to create task: {}", e);
                self.notifier.error(&e.to_string());
            }
        }
        Ok(())
    }

    /// Replace the edit target with the draft, then end the session and
    /// refresh. Draft and session survive a failed request for retry.
    ///
    async fn update_task(&mut self) -> Result<()> {
        let (draft, target) = {
            let state = self.state.lock().await;
            (
                state.get_draft().clone(),
                state.get_edit_session().target().map(String::from),
            )
        };
        let target = match target {
            Some(target) => target,
            None => {
                warn!("Rejecting update request without an edit target.");
                self.notifier
                    .error(&StateError::EditTargetNotSet.to_string());
                return Ok(());
            }
        };
        if draft.is_blank() {
            warn!("Rejecting update request for empty task name.");
            self.notifier.error(&StateError::EmptyName.to_string());
            return Ok(());
        }

        info!("Updating task {}...", target);
        let payload = TaskDraft {
            name: draft.name,
            completed: draft.completed,
        };
        match self.service.update(&target, &payload).await {
            Ok(_) => {
                self.notifier.success("Task updated successfully");
                {
                    self.state.lock().await.reset_draft();
                }
                self.refresh().await?;
            }
            Err(e) => {
                error!("Failed to update task {}: {}", target, e);
                self.notifier.error(&e.to_string());
            }
        }
        Ok(())
    }

    /// Delete the task by identifier, then refresh. Deletion is immediate;
    /// there is no confirmation step or soft delete.
    ///
    async fn delete_task(&mut self, id: String) -> Result<()> {
        info!("Deleting task {}...", id);
        match self.service.delete(&id).await {
            Ok(()) => {
                self.notifier.success("Task deleted successfully");
                self.refresh().await?;
            }
            Err(e) => {
                error!("Failed to delete task {}: {}", id, e);
                self.notifier.error(&e.to_string());
            }
        }
        Ok(())
    }

    /// Replace the task's record with completed set to true, preserving its
    /// name from the current snapshot, then refresh.
    ///
    async fn complete_task(&mut self, id: String) -> Result<()> {
        let name = {
            self.state
                .lock()
                .await
                .find_task(&id)
                .map(|task| task.name.clone())
        };
        let name = match name {
            Some(name) => name,
            None => {
                let err = StateError::TaskNotFound { id };
                warn!("Rejecting complete request: {}", err);
                self.notifier.error(&err.to_string());
                return Ok(());
            }
        };

        info!("Marking task {} completed...", id);
        let payload = TaskDraft {
            name,
            completed: true,
        };
        match self.service.update(&id, &payload).await {
            Ok(_) => {
                self.notifier.success("Task completed");
                self.refresh().await?;
            }
            Err(e) => {
                error!("Failed to complete task {}: {}", id, e);
                self.notifier.error(&e.to_string());
            }
        }
        Ok(())
    }
}
