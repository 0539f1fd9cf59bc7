use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::repositories::{Record, Repository};

/// In-memory implementation of Repository
///
/// Records live in a map keyed by id, with a separate index that keeps
/// insertion order for listing. The whole table sits behind one `RwLock`,
/// so each operation is atomic. Nothing survives a restart.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

struct Table<T> {
    records: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T> InMemoryRepository<T> {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                records: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn insert(&self, record: T) -> Result<T, DomainError> {
        let id = record.id();
        let mut table = self.table.write().await;

        if table.records.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "{} with this ID already exists",
                T::KIND
            )));
        }

        table.records.insert(id, record.clone());
        table.order.push(id);
        tracing::debug!(kind = T::KIND, %id, "record inserted");

        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<T, DomainError> {
        let table = self.table.read().await;
        table.records.get(&id).cloned().ok_or_else(|| {
            tracing::debug!(kind = T::KIND, %id, "record not found");
            DomainError::not_found(T::KIND, id)
        })
    }

    async fn list<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool + Send,
    {
        let table = self.table.read().await;
        table
            .order
            .iter()
            .filter_map(|id| table.records.get(id))
            .filter(|record| predicate(*record))
            .cloned()
            .collect()
    }

    async fn update<F>(&self, id: Uuid, merge: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut T) -> Result<(), DomainError> + Send,
    {
        let mut table = self.table.write().await;
        let stored = table
            .records
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(T::KIND, id))?;

        let mut merged = stored.clone();
        merge(&mut merged)?;
        *stored = merged.clone();
        tracing::debug!(kind = T::KIND, %id, "record updated");

        Ok(merged)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut table = self.table.write().await;

        if table.records.remove(&id).is_none() {
            return Err(DomainError::not_found(T::KIND, id));
        }
        table.order.retain(|existing| *existing != id);
        tracing::debug!(kind = T::KIND, %id, "record deleted");

        Ok(())
    }
}
