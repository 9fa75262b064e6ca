use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Opaque reference into the users service. Probed once at creation,
    /// never re-validated afterwards.
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

impl Todo {
    pub fn new(title: String, description: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            user_id,
            created_at: OffsetDateTime::now_utc(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<String>,
}

/// The allow-listed mutable fields. `user_id` is deliberately absent:
/// a todo never moves between users.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    pub user_id: Option<String>,
}
