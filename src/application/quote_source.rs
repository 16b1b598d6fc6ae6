// Data-source trait for quotes and analytics series
use crate::domain::analytics::SeriesPoint;
use crate::domain::restaurant::Restaurant;
use async_trait::async_trait;

/// Where quote and analytics data comes from. Backed by static fixtures
/// today; a live pricing API client implements the same trait, so the
/// pure comparison logic is exercised identically either way.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// All restaurants known to the source
    async fn list_restaurants(&self) -> anyhow::Result<Vec<Restaurant>>;

    /// One restaurant by id, or None when the id is unknown
    async fn restaurant(&self, id: &str) -> anyhow::Result<Option<Restaurant>>;

    /// Daily revenue per platform for the owner dashboard
    async fn revenue_series(&self) -> anyhow::Result<Vec<SeriesPoint>>;

    /// Daily order counts per platform for the owner dashboard
    async fn orders_series(&self) -> anyhow::Result<Vec<SeriesPoint>>;
}
