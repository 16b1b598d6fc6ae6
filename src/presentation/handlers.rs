// HTTP request handlers
use crate::application::session::Role;
use crate::domain::analytics::PlatformFilter;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub cuisine: Option<String>,
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub platform: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Restaurant list for the consumer home screen, with optional name
/// search and cuisine filter
pub async fn list_restaurants(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state
        .comparison_service
        .search(query.q.as_deref(), query.cuisine.as_deref())
        .await
    {
        Ok(summaries) => Json(summaries).into_response(),
        Err(e) => {
            tracing::error!("error listing restaurants: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Cross-platform price comparison for one restaurant
pub async fn compare_restaurant(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.comparison_service.compare(&id).await {
        Ok(Some(comparison)) => Json(comparison).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("error comparing restaurant {id}: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Owner analytics dashboard, optionally narrowed to one platform
pub async fn owner_dashboard(
    Query(query): Query<DashboardQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Owner-only screen; the session comes from the identity provider
    let is_owner = state
        .session
        .current_user()
        .is_some_and(|user| user.role == Role::Owner);
    if !is_owner {
        return StatusCode::FORBIDDEN.into_response();
    }

    let key = query.platform.as_deref().unwrap_or("all");
    let Some(filter) = PlatformFilter::from_key(key) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("unknown platform filter: {key}"),
        )
            .into_response();
    };

    match state.dashboard_service.dashboard(filter).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => {
            tracing::error!("error building dashboard: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
