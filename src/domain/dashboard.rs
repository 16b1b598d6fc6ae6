// Owner dashboard value objects
use crate::domain::analytics::SeriesPoint;
use crate::domain::platform::Platform;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub metrics: Vec<MetricTile>,
    pub platform_share: Vec<PlatformShare>,
    pub revenue: ChartData,
    pub orders: ChartData,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricTile {
    pub id: String,
    pub title: String,
    pub value: String,
}

/// One platform's share of total revenue, as a percentage.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformShare {
    pub platform: Platform,
    pub label: String,
    pub color: String,
    pub share: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub legend: Vec<LegendEntry>,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub key: Platform,
    pub label: String,
    pub color: String,
}
