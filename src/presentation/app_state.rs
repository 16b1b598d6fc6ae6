// Application state for HTTP handlers
use crate::application::comparison_service::ComparisonService;
use crate::application::dashboard_service::DashboardService;
use crate::application::session::SessionProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub comparison_service: ComparisonService,
    pub dashboard_service: DashboardService,
    pub session: Arc<dyn SessionProvider>,
}
