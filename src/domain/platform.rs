// Delivery platform enumeration and display mapping
use serde::{Deserialize, Serialize};
use std::fmt;

const FALLBACK_COLOR: &str = "#9CA3AF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Grab,
    Shopee,
    Foodpanda,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Grab, Platform::Shopee, Platform::Foodpanda];

    pub fn key(&self) -> &'static str {
        match self {
            Platform::Grab => "grab",
            Platform::Shopee => "shopee",
            Platform::Foodpanda => "foodpanda",
        }
    }

    pub fn from_key(key: &str) -> Option<Platform> {
        match key {
            "grab" => Some(Platform::Grab),
            "shopee" => Some(Platform::Shopee),
            "foodpanda" => Some(Platform::Foodpanda),
            _ => None,
        }
    }

    pub fn display(&self) -> PlatformDisplay {
        let (label, color) = match self {
            Platform::Grab => ("Grab", "#00B14F"),
            Platform::Shopee => ("Shopee", "#EE4D2D"),
            Platform::Foodpanda => ("Foodpanda", "#D70F64"),
        };
        PlatformDisplay {
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformDisplay {
    pub label: String,
    pub color: String,
}

/// Total display mapping over arbitrary platform keys. Unrecognized keys
/// fall back to the raw key with a neutral color instead of failing.
pub fn platform_display(key: &str) -> PlatformDisplay {
    match Platform::from_key(key) {
        Some(platform) => platform.display(),
        None => PlatformDisplay {
            label: key.to_string(),
            color: FALLBACK_COLOR.to_string(),
        },
    }
}
