// Dashboard service - use case for the owner analytics screen
use crate::application::quote_source::QuoteSource;
use crate::domain::analytics::{active_keys, project, PlatformFilter, SeriesPoint};
use crate::domain::dashboard::{ChartData, Dashboard, LegendEntry, MetricTile, PlatformShare};
use crate::domain::platform::Platform;
use crate::domain::quote::format_currency;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn QuoteSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Build the owner dashboard. The platform filter narrows the charts;
    /// the headline metrics always cover all platforms.
    pub async fn dashboard(&self, filter: PlatformFilter) -> anyhow::Result<Dashboard> {
        let revenue = self.source.revenue_series().await?;
        let orders = self.source.orders_series().await?;

        let total_revenue = series_total(&revenue);
        let total_orders = series_total(&orders);
        let avg_order_value = if total_orders > 0.0 {
            total_revenue / total_orders
        } else {
            0.0
        };

        let metrics = vec![
            MetricTile {
                id: "total-revenue".to_string(),
                title: "Total Revenue".to_string(),
                value: format_currency(total_revenue),
            },
            MetricTile {
                id: "total-orders".to_string(),
                title: "Total Orders".to_string(),
                value: format!("{}", total_orders as i64),
            },
            MetricTile {
                id: "avg-order-value".to_string(),
                title: "Avg. Order Value".to_string(),
                value: format_currency(avg_order_value),
            },
        ];

        let scope = match filter {
            PlatformFilter::All => "All Platforms".to_string(),
            PlatformFilter::Only(platform) => platform.display().label,
        };

        Ok(Dashboard {
            title: format!("Sales Analytics ({})", scope),
            metrics,
            platform_share: platform_share(&revenue, total_revenue),
            revenue: chart("revenue", "Revenue by Platform", &revenue, filter),
            orders: chart("orders", "Orders by Platform", &orders, filter),
        })
    }
}

fn chart(id: &str, title: &str, series: &[SeriesPoint], filter: PlatformFilter) -> ChartData {
    let legend = active_keys(filter)
        .into_iter()
        .map(|platform| {
            let display = platform.display();
            LegendEntry {
                key: platform,
                label: display.label,
                color: display.color,
            }
        })
        .collect();

    ChartData {
        id: id.to_string(),
        title: title.to_string(),
        legend,
        points: project(series, filter),
    }
}

fn series_total(series: &[SeriesPoint]) -> f64 {
    Platform::ALL
        .iter()
        .map(|&platform| platform_total(series, platform))
        .sum()
}

fn platform_total(series: &[SeriesPoint], platform: Platform) -> f64 {
    series.iter().filter_map(|p| p.value(platform)).sum()
}

fn platform_share(revenue: &[SeriesPoint], total: f64) -> Vec<PlatformShare> {
    if total <= 0.0 {
        return Vec::new();
    }
    Platform::ALL
        .iter()
        .map(|&platform| {
            let display = platform.display();
            let share = platform_total(revenue, platform) / total * 100.0;
            PlatformShare {
                platform,
                label: display.label,
                color: display.color,
                share: (share * 10.0).round() / 10.0,
            }
        })
        .collect()
}
