//! PostgreSQL resource storage

use async_trait::async_trait;
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    FromRow, Pool, Postgres, Row,
};
use std::sync::Arc;

use super::{IdGenerator, ResourceRepository};
use crate::{
    config::StorageConfig,
    error::AppResult,
    models::{Category, NewResource, Resource, SkillLevel},
};

const COLUMNS: &str =
    "id, title, description, category, skill_level, image_url, resource_type, video_url";

/// Resources persisted in the `resources` table
#[derive(Clone)]
pub struct PostgresRepository {
    pool: Pool<Postgres>,
    ids: Arc<dyn IdGenerator>,
}

impl PostgresRepository {
    pub fn new(pool: Pool<Postgres>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pool, ids }
    }

    /// Open a pool from configuration and apply pending migrations
    pub async fn connect(config: &StorageConfig, ids: Arc<dyn IdGenerator>) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.database_url)
            .await?;

        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!("Database migrations completed");

        Ok(Self::new(pool, ids))
    }

    async fn insert(&self, id: &str, data: &NewResource) -> Result<Resource, sqlx::Error> {
        sqlx::query_as::<_, Resource>(&format!(
            r#"
            INSERT INTO resources (id, title, description, category, skill_level, image_url, resource_type, video_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.category.as_str())
        .bind(data.skill_level.as_str())
        .bind(&data.image_url)
        .bind(&data.resource_type)
        .bind(&data.video_url)
        .fetch_one(&self.pool)
        .await
    }
}

/// Attempts at finding a free id before giving up on a create
const MAX_ID_ATTEMPTS: usize = 5;

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|e| e.is_unique_violation())
}

fn decode_label<T>(row: &PgRow, column: &str) -> Result<T, sqlx::Error>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = row.try_get(column)?;
    raw.parse::<T>().map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: e.into(),
    })
}

impl<'r> FromRow<'r, PgRow> for Resource {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Resource {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: decode_label::<Category>(row, "category")?,
            skill_level: decode_label::<SkillLevel>(row, "skill_level")?,
            image_url: row.try_get("image_url")?,
            resource_type: row.try_get("resource_type")?,
            video_url: row.try_get("video_url")?,
        })
    }
}

#[async_trait]
impl ResourceRepository for PostgresRepository {
    async fn list(&self) -> AppResult<Vec<Resource>> {
        let rows = sqlx::query_as::<_, Resource>(&format!(
            "SELECT {} FROM resources ORDER BY seq",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: &str) -> AppResult<Option<Resource>> {
        let row = sqlx::query_as::<_, Resource>(&format!(
            "SELECT {} FROM resources WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, data: NewResource) -> AppResult<Resource> {
        let mut attempt = 1;
        loop {
            let id = self.ids.generate();
            match self.insert(&id, &data).await {
                Ok(row) => return Ok(row),
                Err(err) if attempt < MAX_ID_ATTEMPTS && is_unique_violation(&err) => {
                    tracing::warn!(id = %id, "Generated resource id already taken, retrying");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn update(&self, id: &str, data: NewResource) -> AppResult<Option<Resource>> {
        let row = sqlx::query_as::<_, Resource>(&format!(
            r#"
            UPDATE resources
            SET title = $2, description = $3, category = $4, skill_level = $5,
                image_url = $6, resource_type = $7, video_url = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.category.as_str())
        .bind(data.skill_level.as_str())
        .bind(&data.image_url)
        .bind(&data.resource_type)
        .bind(&data.video_url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
