//! Repository layer for resource storage

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    error::AppResult,
    models::{NewResource, Resource},
};

pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;

/// Storage contract for resources.
///
/// Missing records are reported as `Ok(None)` / `Ok(false)`; `Err` is reserved
/// for backend failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// All records, in insertion order
    async fn list(&self) -> AppResult<Vec<Resource>>;

    async fn get(&self, id: &str) -> AppResult<Option<Resource>>;

    /// Store a new record under a freshly generated id
    async fn create(&self, data: NewResource) -> AppResult<Resource>;

    /// Replace every field except `id`
    async fn update(&self, id: &str, data: NewResource) -> AppResult<Option<Resource>>;

    /// Returns `true` if the record existed and was removed
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Source of identifiers for newly created resources
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `prefix-1`, `prefix-2`, ... ids
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Insert `resources` unless the store already holds records.
///
/// Returns the number of records inserted.
pub async fn seed(repo: &dyn ResourceRepository, resources: Vec<NewResource>) -> AppResult<usize> {
    if !repo.list().await?.is_empty() {
        tracing::info!("Storage already populated, skipping seed");
        return Ok(0);
    }

    let count = resources.len();
    for data in resources {
        repo.create(data).await?;
    }
    tracing::info!("Seeded {} sample resources", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed::seed_resources;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("res");
        assert_eq!(ids.generate(), "res-1");
        assert_eq!(ids.generate(), "res-2");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids: HashSet<_> = (0..100).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let repo = InMemoryRepository::new(Arc::new(SequentialIdGenerator::new("r")));

        assert_eq!(seed(&repo, seed_resources()).await.unwrap(), 6);
        assert_eq!(seed(&repo, seed_resources()).await.unwrap(), 0);
        assert_eq!(repo.list().await.unwrap().len(), 6);
    }
}
