// Infrastructure layer - configuration and concrete data sources
pub mod config;
pub mod fixture_source;
pub mod session;
