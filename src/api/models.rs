//! Wire-format types for the task collection resource.

use serde::{Deserialize, Serialize};

/// Task record as returned by the server. The original backend stores tasks
/// in MongoDB and serves the identifier as `_id`; both key spellings are
/// accepted here.
///
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TaskModel {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request body for create and update operations. Updates replace the full
/// record, so both fields are always sent.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub name: String,
    pub completed: bool,
}
