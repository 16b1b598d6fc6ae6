// Analytics series points and the platform filter/projector
use crate::domain::platform::Platform;
use serde::{Deserialize, Serialize};

/// One labeled point of a multi-platform series (revenue or order count
/// per platform for one day). Platforms are fixed fields rather than an
/// open map so the recognized keys are checked at compile time; a `None`
/// value is omitted from the serialized point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grab: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foodpanda: Option<f64>,
}

impl SeriesPoint {
    pub fn value(&self, platform: Platform) -> Option<f64> {
        match platform {
            Platform::Grab => self.grab,
            Platform::Shopee => self.shopee,
            Platform::Foodpanda => self.foodpanda,
        }
    }

    /// The point reduced to the label and a single platform's value.
    /// A platform absent from the point yields a point with no value.
    pub fn only(&self, platform: Platform) -> SeriesPoint {
        let mut reduced = SeriesPoint {
            label: self.label.clone(),
            grab: None,
            shopee: None,
            foodpanda: None,
        };
        match platform {
            Platform::Grab => reduced.grab = self.grab,
            Platform::Shopee => reduced.shopee = self.shopee,
            Platform::Foodpanda => reduced.foodpanda = self.foodpanda,
        }
        reduced
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFilter {
    All,
    Only(Platform),
}

impl PlatformFilter {
    /// Parse the query-string form: "all" or a platform key.
    pub fn from_key(key: &str) -> Option<PlatformFilter> {
        if key == "all" {
            Some(PlatformFilter::All)
        } else {
            Platform::from_key(key).map(PlatformFilter::Only)
        }
    }
}

/// Reduce a series to the filtered platform's column. The identity for
/// `All`; point count and order are always preserved.
pub fn project(series: &[SeriesPoint], filter: PlatformFilter) -> Vec<SeriesPoint> {
    match filter {
        PlatformFilter::All => series.to_vec(),
        PlatformFilter::Only(platform) => series.iter().map(|p| p.only(platform)).collect(),
    }
}

/// The platform keys present in a projected series, in canonical order.
/// Drives which chart series and legend entries get drawn.
pub fn active_keys(filter: PlatformFilter) -> Vec<Platform> {
    match filter {
        PlatformFilter::All => Platform::ALL.to_vec(),
        PlatformFilter::Only(platform) => vec![platform],
    }
}
