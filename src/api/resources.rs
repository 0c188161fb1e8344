//! Resource catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::ValidatedResource;
use crate::{error::AppResult, models::Resource, AppState};

/// List all resources
#[utoipa::path(
    get,
    path = "/resources",
    tag = "resources",
    responses(
        (status = 200, description = "All resources", body = Vec<Resource>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_resources(State(state): State<AppState>) -> AppResult<Json<Vec<Resource>>> {
    let resources = state.services.resources.list().await?;
    Ok(Json(resources))
}

/// Get a resource by ID
#[utoipa::path(
    get,
    path = "/resources/{id}",
    tag = "resources",
    params(("id" = String, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource details", body = Resource),
        (status = 404, description = "Resource not found", body = ErrorResponse)
    )
)]
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Resource>> {
    let resource = state.services.resources.get(&id).await?;
    Ok(Json(resource))
}

/// Create a resource
#[utoipa::path(
    post,
    path = "/resources",
    tag = "resources",
    request_body = ResourcePayload,
    responses(
        (status = 201, description = "Resource created", body = Resource),
        (status = 400, description = "Invalid resource data", body = ErrorResponse)
    )
)]
pub async fn create_resource(
    State(state): State<AppState>,
    ValidatedResource(data): ValidatedResource,
) -> AppResult<(StatusCode, Json<Resource>)> {
    let resource = state.services.resources.create(data).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// Replace a resource.
///
/// Every field is overwritten; this is not a partial merge.
#[utoipa::path(
    patch,
    path = "/resources/{id}",
    tag = "resources",
    params(("id" = String, Path, description = "Resource ID")),
    request_body = ResourcePayload,
    responses(
        (status = 200, description = "Resource updated", body = Resource),
        (status = 400, description = "Invalid resource data", body = ErrorResponse),
        (status = 404, description = "Resource not found", body = ErrorResponse)
    )
)]
pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedResource(data): ValidatedResource,
) -> AppResult<Json<Resource>> {
    let resource = state.services.resources.update(&id, data).await?;
    Ok(Json(resource))
}

/// Delete a resource
#[utoipa::path(
    delete,
    path = "/resources/{id}",
    tag = "resources",
    params(("id" = String, Path, description = "Resource ID")),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 404, description = "Resource not found", body = ErrorResponse)
    )
)]
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.resources.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
