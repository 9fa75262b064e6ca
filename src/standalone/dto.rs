use serde::{Deserialize, Serialize};

/// Client-supplied identifier; uniqueness is NOT enforced. When two items
/// share an id, only the first one in insertion order is reachable by the
/// id-keyed routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}
