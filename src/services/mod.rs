//! Business logic services

pub mod resources;

use std::sync::Arc;

use crate::repository::ResourceRepository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub resources: resources::ResourceService,
}

impl Services {
    /// Create all services over the given storage backend
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self {
            resources: resources::ResourceService::new(repository),
        }
    }
}
