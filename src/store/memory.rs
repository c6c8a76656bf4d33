use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;
use crate::store::{CredentialStore, Identified, Repository};

fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, AppError> {
    mutex
        .lock()
        .map_err(|_| AppError::InternalServerError(format!("{} lock poisoned", name)))
}

/// A `Vec` behind a single mutex. Lookups are linear, which is fine for the
/// handful of items a single user tracks.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    name: &'static str,
    items: Mutex<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            items: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Identified + Clone + Send,
{
    fn list(&self) -> Result<Vec<T>, AppError> {
        Ok(lock(&self.items, self.name)?.clone())
    }

    fn add(&self, item: T) -> Result<T, AppError> {
        let mut items = lock(&self.items, self.name)?;
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(AppError::InternalServerError(format!(
                "duplicate id {} in {}",
                item.id(),
                self.name
            )));
        }
        items.push(item.clone());
        Ok(item)
    }

    fn update_by_id(
        &self,
        id: Uuid,
        update: &mut dyn FnMut(&mut T),
    ) -> Result<Option<T>, AppError> {
        let mut items = lock(&self.items, self.name)?;
        Ok(items.iter_mut().find(|item| item.id() == id).map(|item| {
            update(item);
            item.clone()
        }))
    }

    fn update_all(&self, update: &mut dyn FnMut(&mut T)) -> Result<usize, AppError> {
        let mut items = lock(&self.items, self.name)?;
        items.iter_mut().for_each(|item| update(item));
        Ok(items.len())
    }
}

/// Users keyed by their email exactly as registered.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users, "users")?.get(email).cloned())
    }

    fn insert(&self, user: User) -> Result<User, AppError> {
        let mut users = lock(&self.users, "users")?;
        if users.contains_key(&user.email) {
            return Err(AppError::Conflict("User already exists".into()));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }
}
