//! Video embedding endpoint

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    video::{embed_url, is_supported_video_url},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmbedQuery {
    /// Video page URL as entered by the user
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbedResponse {
    /// Host is a known video provider
    pub supported: bool,
    /// Player URL, when a video id could be extracted
    pub embed_url: Option<String>,
}

/// Resolve an embeddable player URL
#[utoipa::path(
    get,
    path = "/video/embed",
    tag = "video",
    params(EmbedQuery),
    responses(
        (status = 200, description = "Embed lookup result", body = EmbedResponse),
        (status = 400, description = "Missing or malformed query string")
    )
)]
pub async fn embed(
    query: Result<Query<EmbedQuery>, QueryRejection>,
) -> AppResult<Json<EmbedResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    Ok(Json(EmbedResponse {
        supported: is_supported_video_url(&query.url),
        embed_url: embed_url(&query.url),
    }))
}
