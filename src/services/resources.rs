//! Resource catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{NewResource, Resource},
    repository::ResourceRepository,
};

#[derive(Clone)]
pub struct ResourceService {
    repository: Arc<dyn ResourceRepository>,
}

fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

impl ResourceService {
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Resource>> {
        self.repository.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Resource> {
        self.repository.get(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, data: NewResource) -> AppResult<Resource> {
        let resource = self.repository.create(data).await?;
        tracing::info!(id = %resource.id, title = %resource.title, "Resource created");
        Ok(resource)
    }

    /// Replace every field of an existing resource
    pub async fn update(&self, id: &str, data: NewResource) -> AppResult<Resource> {
        let resource = self.repository.update(id, data).await?.ok_or_else(not_found)?;
        tracing::info!(id = %resource.id, title = %resource.title, "Resource updated");
        Ok(resource)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }
        tracing::info!(id = %id, "Resource deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, SkillLevel};
    use crate::repository::MockResourceRepository;

    fn new_resource() -> NewResource {
        NewResource {
            title: "Design Systems".to_string(),
            description: "Building consistent component libraries.".to_string(),
            category: Category::Design,
            skill_level: SkillLevel::Advanced,
            image_url: "https://example.com/ds.png".to_string(),
            resource_type: "Workshop".to_string(),
            video_url: None,
        }
    }

    #[tokio::test]
    async fn test_missing_get_is_not_found() {
        let mut repo = MockResourceRepository::new();
        repo.expect_get().returning(|_| Ok(None));

        let service = ResourceService::new(Arc::new(repo));
        assert!(matches!(service.get("x").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_update_is_not_found() {
        let mut repo = MockResourceRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ResourceService::new(Arc::new(repo));
        let result = service.update("x", new_resource()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_delete_is_not_found() {
        let mut repo = MockResourceRepository::new();
        repo.expect_delete()
            .withf(|id| id == "x")
            .times(1)
            .returning(|_| Ok(false));

        let service = ResourceService::new(Arc::new(repo));
        assert!(matches!(service.delete("x").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut repo = MockResourceRepository::new();
        repo.expect_list()
            .returning(|| Err(AppError::Internal("disk on fire".to_string())));

        let service = ResourceService::new(Arc::new(repo));
        assert!(matches!(service.list().await, Err(AppError::Internal(_))));
    }
}
