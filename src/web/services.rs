use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use std::collections::HashMap;

use super::{error::WebError, models::HealthResponse, state::AppState};
use crate::assets::content_type;
use crate::carousel::SlidePositions;
use crate::site::SiteError;

type PageResult = Result<Html<String>, WebError>;

/// Count the outcome of a page render.
fn page(state: &AppState, rendered: Result<String, SiteError>) -> PageResult {
    match rendered {
        Ok(html) => {
            state.metrics.page_rendered();
            Ok(Html(html))
        }
        Err(err) => {
            if err.is_not_found() {
                state.metrics.not_found();
            }
            Err(err.into())
        }
    }
}

/// Home page (GET /)
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> PageResult {
    let rendered = state.site.home(&SlidePositions::from_query(&query)).await;
    page(&state, rendered)
}

/// About page (GET /about)
pub async fn about(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> PageResult {
    let rendered = state.site.about(&SlidePositions::from_query(&query)).await;
    page(&state, rendered)
}

/// Work page with highlights, project cards and the document library (GET /work)
pub async fn work(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> PageResult {
    let rendered = state.site.work(&SlidePositions::from_query(&query)).await;
    page(&state, rendered)
}

/// Single project (GET /work/{slug})
pub async fn project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> PageResult {
    let rendered = state
        .site
        .project(&slug, &SlidePositions::from_query(&query))
        .await;
    page(&state, rendered)
}

/// Slide images (GET /images/{*path}), answered from the warm cache when preloaded
pub async fn image(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, WebError> {
    let src = format!("/images/{path}");
    let bytes = state.assets.fetch(&src).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type(&src).to_string())],
        bytes,
    ))
}

/// Fallback for unknown routes
pub async fn not_found(State(state): State<AppState>) -> WebError {
    state.metrics.not_found();
    WebError::NotFound("no such route".to_string())
}

/// Health check endpoint (GET /health)
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mut components = HashMap::new();
    components.insert("web".to_string(), "healthy".to_string());

    let projects = if state.config.content.projects_dir.is_dir() {
        "healthy"
    } else {
        "missing"
    };
    components.insert("projects".to_string(), projects.to_string());

    let all_healthy = components.values().all(|status| status == "healthy");
    let (status, status_code) = if all_healthy {
        ("healthy", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = HealthResponse {
        status: status.to_string(),
        components,
        metrics: state.metrics.snapshot(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status_code, Json(response))
}
