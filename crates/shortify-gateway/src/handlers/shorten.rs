use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let shortened = state.shortener().shorten(&request.url).await?;
    let short_url = state.short_url(&shortened.slug);

    info!(slug = %shortened.slug, short_url = %short_url, "created short url");

    Ok(Json(ShortenResponse {
        short_url,
        slug: shortened.slug.into(),
        original_url: shortened.original_url,
    }))
}
