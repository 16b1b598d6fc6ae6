// Domain layer - pure value objects and computations
pub mod analytics;
pub mod dashboard;
pub mod error;
pub mod platform;
pub mod quote;
pub mod restaurant;
