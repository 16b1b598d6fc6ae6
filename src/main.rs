// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::comparison_service::ComparisonService;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::{load_fixtures_config, load_server_config};
use crate::infrastructure::fixture_source::FixtureQuoteSource;
use crate::infrastructure::session::StaticSessionProvider;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    compare_restaurant, health_check, list_restaurants, owner_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let fixtures_config = load_fixtures_config()?;

    // Create data source and session provider (infrastructure layer)
    let source = Arc::new(FixtureQuoteSource::from_config(fixtures_config)?);
    let session = Arc::new(StaticSessionProvider::from_settings(server_config.session));

    // Create services (application layer)
    let comparison_service = ComparisonService::new(source.clone());
    let dashboard_service = DashboardService::new(source.clone());

    // Create application state
    let state = Arc::new(AppState {
        comparison_service,
        dashboard_service,
        session,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id/comparison", get(compare_restaurant))
        .route("/dashboard", get(owner_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config.server.listen.parse()?;
    tracing::info!("Starting makan-compare service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
