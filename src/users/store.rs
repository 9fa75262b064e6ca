use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::{UpdateUser, User};

/// In-memory user records, shared by every handler of the users service.
/// The lock is held per map operation and never across an await.
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl UserStore {
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, User>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list(&self) -> Vec<User> {
        self.lock().values().cloned().collect()
    }

    pub fn get(&self, id: &Uuid) -> Option<User> {
        self.lock().get(id).cloned()
    }

    pub fn insert(&self, user: User) {
        self.lock().insert(user.id, user);
    }

    /// Applies the patch to an existing record and stamps `updated_at`.
    /// Returns the merged record, or `None` if the id is unknown.
    pub fn update(&self, id: &Uuid, patch: UpdateUser) -> Option<User> {
        let mut map = self.lock();
        let user = map.get_mut(id)?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        user.updated_at = Some(OffsetDateTime::now_utc());
        Some(user.clone())
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        self.lock().remove(id).is_some()
    }
}
