// Application layer - use-case services over abstract collaborators
pub mod comparison_service;
pub mod dashboard_service;
pub mod quote_source;
pub mod session;
