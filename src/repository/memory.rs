//! In-memory resource storage

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{IdGenerator, ResourceRepository};
use crate::{
    error::AppResult,
    models::{NewResource, Resource},
};

/// Process-lifetime store keyed by resource id.
///
/// The lock is held for the whole of each operation, so reads and writes on
/// a key are atomic with respect to each other.
#[derive(Clone)]
pub struct InMemoryRepository {
    storage: Arc<RwLock<IndexMap<String, Resource>>>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryRepository {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(IndexMap::new())),
            ids,
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.storage.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.storage.read().await.is_empty()
    }
}

#[async_trait]
impl ResourceRepository for InMemoryRepository {
    async fn list(&self) -> AppResult<Vec<Resource>> {
        Ok(self.storage.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Resource>> {
        Ok(self.storage.read().await.get(id).cloned())
    }

    async fn create(&self, data: NewResource) -> AppResult<Resource> {
        let mut storage = self.storage.write().await;

        let mut id = self.ids.generate();
        while storage.contains_key(&id) {
            id = self.ids.generate();
        }

        let resource = Resource::from_new(id.clone(), data);
        storage.insert(id, resource.clone());
        Ok(resource)
    }

    async fn update(&self, id: &str, data: NewResource) -> AppResult<Option<Resource>> {
        let mut storage = self.storage.write().await;

        let Some(slot) = storage.get_mut(id) else {
            return Ok(None);
        };

        *slot = Resource::from_new(id.to_string(), data);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.storage.write().await.shift_remove(id).is_some())
    }
}
