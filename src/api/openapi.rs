//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, resources, video};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EduLibrary API",
        version = "1.0.0",
        description = "Educational resource catalog REST API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Resources
        resources::list_resources,
        resources::get_resource,
        resources::create_resource,
        resources::update_resource,
        resources::delete_resource,
        // Video
        video::embed,
    ),
    components(
        schemas(
            crate::models::Resource,
            crate::models::ResourcePayload,
            crate::models::Category,
            crate::models::SkillLevel,
            video::EmbedResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
            crate::error::FieldError,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "resources", description = "Educational resource catalog"),
        (name = "video", description = "Video embedding helpers")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
