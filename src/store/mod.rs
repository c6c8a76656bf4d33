//! Storage seams for the tracker.
//!
//! Collections are reached through [`Repository`] and users through
//! [`CredentialStore`], so the mutation logic in `collections` and `auth`
//! never sees how items are kept. The only implementations shipped are the
//! in-memory ones in [`memory`].

pub mod ids;
pub mod memory;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;

pub use ids::{IdGenerator, RandomIds, SequentialIds};
pub use memory::{InMemoryCredentialStore, InMemoryRepository};

/// Items that carry their own unique id.
pub trait Identified {
    fn id(&self) -> Uuid;
}

/// An insertion-ordered collection of items.
///
/// Every method is atomic with respect to every other call on the same
/// repository.
pub trait Repository<T>: Send + Sync {
    /// All items, oldest first.
    fn list(&self) -> Result<Vec<T>, AppError>;

    /// Appends `item` and returns the stored copy.
    fn add(&self, item: T) -> Result<T, AppError>;

    /// Applies `update` to the item with `id` and returns the result,
    /// or `None` when no such item exists.
    fn update_by_id(
        &self,
        id: Uuid,
        update: &mut dyn FnMut(&mut T),
    ) -> Result<Option<T>, AppError>;

    /// Applies `update` to every item and returns how many were visited.
    fn update_all(&self, update: &mut dyn FnMut(&mut T)) -> Result<usize, AppError>;
}

/// Registered users keyed by email.
pub trait CredentialStore: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Stores a new user. Fails with `AppError::Conflict` when the email is
    /// already registered, even if a concurrent registration got there first.
    fn insert(&self, user: User) -> Result<User, AppError>;
}
