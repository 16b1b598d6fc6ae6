use crate::application::session::Role;
use crate::domain::platform::Platform;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub session: Option<SessionSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
}

/// The signed-in user, as far as this service is concerned. A real
/// deployment gets this from the identity provider in front of the app.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub user_id: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixturesConfig {
    #[serde(default)]
    pub restaurants: Vec<RestaurantConfig>,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestaurantConfig {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    pub rating: f64,
    pub distance: String,
    #[serde(default)]
    pub quotes: Vec<QuoteConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuoteConfig {
    pub platform: Platform,
    pub price: f64,
    pub delivery_fee: f64,
    pub original_price: Option<f64>,
    pub estimated_time: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub revenue: Vec<PointConfig>,
    #[serde(default)]
    pub orders: Vec<PointConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PointConfig {
    pub label: String,
    pub grab: Option<f64>,
    pub shopee: Option<f64>,
    pub foodpanda: Option<f64>,
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_fixtures_config() -> anyhow::Result<FixturesConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/fixtures"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
