use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// A storable record with an immutable identifier
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable kind used in error messages, e.g. "Pet"
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

/// Repository trait for one record type
///
/// Defines the contract every storage backend honors. Each call is atomic
/// with respect to the other calls on the same repository.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Insert a new record
    ///
    /// Fails with `Conflict` if the id is already taken.
    async fn insert(&self, record: T) -> Result<T, DomainError>;

    /// Find a record by its ID
    async fn get(&self, id: Uuid) -> Result<T, DomainError>;

    /// All records accepted by `predicate`, in insertion order
    async fn list<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool + Send;

    /// Merge changes into an existing record
    ///
    /// `merge` runs on a copy; the stored record is replaced only when it
    /// returns `Ok`, so a rejected update changes nothing.
    async fn update<F>(&self, id: Uuid, merge: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut T) -> Result<(), DomainError> + Send;

    /// Delete a record by ID
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}
