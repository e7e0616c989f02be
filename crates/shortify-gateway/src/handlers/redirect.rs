use crate::model::RedirectQuery;
use crate::origin::origin_root;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use shortify_core::Slug;
use shortify_redirector::Resolution;
use tracing::{debug, warn};

pub async fn redirect_query_handler(
    State(state): State<AppState>,
    Query(query): Query<RedirectQuery>,
    headers: HeaderMap,
) -> Response {
    redirect(&state, query.slug.unwrap_or_default(), &headers).await
}

pub async fn redirect_path_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    redirect(&state, slug, &headers).await
}

async fn redirect(state: &AppState, raw: String, headers: &HeaderMap) -> Response {
    let slug = match Slug::new(raw) {
        Ok(slug) => slug,
        Err(e) => {
            debug!(error = %e, "rejecting redirect request");
            return (StatusCode::BAD_REQUEST, "Invalid slug").into_response();
        }
    };

    match state.redirector().resolve(&slug).await {
        Resolution::Found(url) => match HeaderValue::try_from(url) {
            Ok(location) => (StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response(),
            Err(e) => {
                warn!(slug = %slug, error = %e, "stored url is not a valid location, treating as missing");
                fallback(state, headers)
            }
        },
        Resolution::Missing => fallback(state, headers),
    }
}

/// 302 to the origin root.
fn fallback(state: &AppState, headers: &HeaderMap) -> Response {
    let root = origin_root(state.public_base_url(), headers);
    let location = HeaderValue::try_from(root).unwrap_or_else(|_| HeaderValue::from_static("/"));
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
