use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{Todo, UpdateTodo};

/// In-memory todo records for the todos service. Same shape and locking
/// discipline as the users store.
#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Arc<Mutex<HashMap<Uuid, Todo>>>,
}

impl TodoStore {
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Todo>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All todos, or only those belonging to `user_id` when given.
    /// Iteration order of the map, no ordering guarantee.
    pub fn list(&self, user_id: Option<&str>) -> Vec<Todo> {
        let map = self.lock();
        match user_id {
            Some(uid) => map.values().filter(|t| t.user_id == uid).cloned().collect(),
            None => map.values().cloned().collect(),
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<Todo> {
        self.lock().get(id).cloned()
    }

    pub fn insert(&self, todo: Todo) {
        self.lock().insert(todo.id, todo);
    }

    pub fn update(&self, id: &Uuid, patch: UpdateTodo) -> Option<Todo> {
        let mut map = self.lock();
        let todo = map.get_mut(id)?;
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        todo.updated_at = Some(OffsetDateTime::now_utc());
        Some(todo.clone())
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        self.lock().remove(id).is_some()
    }
}
