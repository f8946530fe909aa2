use fake::Dummy;

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub completed: bool,
}
