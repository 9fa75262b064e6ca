use std::sync::{Arc, Mutex, MutexGuard};

use super::dto::TodoItem;

/// Ordered in-memory sequence of todo items. Lookups scan linearly and
/// stop at the first id match, so a duplicate id shadows later entries.
#[derive(Clone, Default)]
pub struct TodoDb {
    inner: Arc<Mutex<Vec<TodoItem>>>,
}

impl TodoDb {
    fn lock(&self) -> MutexGuard<'_, Vec<TodoItem>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list(&self) -> Vec<TodoItem> {
        self.lock().clone()
    }

    pub fn push(&self, item: TodoItem) {
        self.lock().push(item);
    }

    pub fn find(&self, id: i64) -> Option<TodoItem> {
        self.lock().iter().find(|t| t.id == id).cloned()
    }

    /// Replaces the first item with a matching id wholesale, including the
    /// replacement's own id field.
    pub fn replace(&self, id: i64, item: TodoItem) -> Option<TodoItem> {
        let mut items = self.lock();
        let slot = items.iter_mut().find(|t| t.id == id)?;
        *slot = item.clone();
        Some(item)
    }

    pub fn remove(&self, id: i64) -> bool {
        let mut items = self.lock();
        match items.iter().position(|t| t.id == id) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }
}
