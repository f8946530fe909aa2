//! Form draft and edit-session state types.
//!
//! This module contains the transient, client-only types backing the task
//! form: the in-progress draft and the marker distinguishing "creating new"
//! from "editing existing".

/// Transient form input, not yet persisted. Discarded or reset after each
/// successful mutation.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub completed: bool,
}

impl Default for Draft {
    fn default() -> Draft {
        Draft {
            name: String::new(),
            completed: false,
        }
    }
}

impl Draft {
    /// Whether the draft fails name validation. Whitespace-only names count
    /// as empty.
    ///
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Specifying whether the draft targets a new task or an in-place edit of an
/// existing one. Entering an edit overwrites any prior draft; there are no
/// concurrent edit sessions.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditSession {
    Inactive,
    Active { target: String },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Active { .. })
    }

    /// Identifier of the task being edited, if any.
    ///
    pub fn target(&self) -> Option<&str> {
        match self {
            EditSession::Active { target } => Some(target),
            EditSession::Inactive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_default() {
        let draft = Draft::default();
        assert_eq!(draft.name, "");
        assert!(!draft.completed);
        assert!(draft.is_blank());
    }

    #[test]
    fn test_draft_blank_on_whitespace() {
        let draft = Draft {
            name: "   ".to_string(),
            completed: false,
        };
        assert!(draft.is_blank());
    }

    #[test]
    fn test_draft_not_blank() {
        let draft = Draft {
            name: "Buy milk".to_string(),
            completed: false,
        };
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_edit_session_inactive() {
        let session = EditSession::Inactive;
        assert!(!session.is_editing());
        assert_eq!(session.target(), None);
    }

    #[test]
    fn test_edit_session_active() {
        let session = EditSession::Active {
            target: "9".to_string(),
        };
        assert!(session.is_editing());
        assert_eq!(session.target(), Some("9"));
    }
}
