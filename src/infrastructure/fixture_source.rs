// Fixture-backed quote source
use crate::application::quote_source::QuoteSource;
use crate::domain::analytics::SeriesPoint;
use crate::domain::quote::PlatformQuote;
use crate::domain::restaurant::Restaurant;
use crate::infrastructure::config::{FixturesConfig, PointConfig};
use anyhow::Context;
use async_trait::async_trait;

/// Serves the static fixture data that stands in for a live pricing API.
/// All integrity checks run once at startup, so every later fetch hands
/// out already-validated values.
#[derive(Debug, Clone)]
pub struct FixtureQuoteSource {
    restaurants: Vec<Restaurant>,
    revenue: Vec<SeriesPoint>,
    orders: Vec<SeriesPoint>,
}

impl FixtureQuoteSource {
    pub fn from_config(config: FixturesConfig) -> anyhow::Result<Self> {
        let mut restaurants = Vec::with_capacity(config.restaurants.len());
        for restaurant in config.restaurants {
            let quotes = restaurant
                .quotes
                .into_iter()
                .map(|q| PlatformQuote {
                    platform: q.platform,
                    price: q.price,
                    delivery_fee: q.delivery_fee,
                    original_price: q.original_price,
                    estimated_time: q.estimated_time,
                })
                .collect();

            let name = restaurant.name.clone();
            restaurants.push(
                Restaurant::new(
                    restaurant.id,
                    restaurant.name,
                    restaurant.image,
                    restaurant.cuisine,
                    restaurant.rating,
                    restaurant.distance,
                    quotes,
                )
                .with_context(|| format!("invalid fixture for restaurant {}", name))?,
            );
        }

        Ok(Self {
            restaurants,
            revenue: config.analytics.revenue.into_iter().map(point).collect(),
            orders: config.analytics.orders.into_iter().map(point).collect(),
        })
    }
}

fn point(config: PointConfig) -> SeriesPoint {
    SeriesPoint {
        label: config.label,
        grab: config.grab,
        shopee: config.shopee,
        foodpanda: config.foodpanda,
    }
}

#[async_trait]
impl QuoteSource for FixtureQuoteSource {
    async fn list_restaurants(&self) -> anyhow::Result<Vec<Restaurant>> {
        Ok(self.restaurants.clone())
    }

    async fn restaurant(&self, id: &str) -> anyhow::Result<Option<Restaurant>> {
        Ok(self.restaurants.iter().find(|r| r.id == id).cloned())
    }

    async fn revenue_series(&self) -> anyhow::Result<Vec<SeriesPoint>> {
        Ok(self.revenue.clone())
    }

    async fn orders_series(&self) -> anyhow::Result<Vec<SeriesPoint>> {
        Ok(self.orders.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::platform::Platform;

    fn fixtures(body: &str) -> FixturesConfig {
        toml::from_str(body).unwrap()
    }

    const SAMPLE: &str = r#"
        [[restaurants]]
        id = "1"
        name = "Warong Nasi Lemak"
        image = "https://example.com/nasi-lemak.jpg"
        cuisine = "Malaysian"
        rating = 4.7
        distance = "1.2 km"

        [[restaurants.quotes]]
        platform = "grab"
        price = 12.90
        delivery_fee = 3.00
        estimated_time = "25-30 min"

        [[restaurants.quotes]]
        platform = "foodpanda"
        price = 12.50
        delivery_fee = 2.50
        estimated_time = "20-30 min"

        [[analytics.revenue]]
        label = "Mon"
        grab = 4500.0
        shopee = 2400.0
        foodpanda = 3800.0

        [[analytics.orders]]
        label = "Mon"
        grab = 42.0
        shopee = 23.0
        foodpanda = 35.0
    "#;

    #[tokio::test]
    async fn test_materializes_configured_fixtures() {
        let source = FixtureQuoteSource::from_config(fixtures(SAMPLE)).unwrap();

        let restaurants = source.list_restaurants().await.unwrap();
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].quotes.len(), 2);
        assert_eq!(restaurants[0].quotes[0].platform, Platform::Grab);

        let found = source.restaurant("1").await.unwrap();
        assert_eq!(found.unwrap().name, "Warong Nasi Lemak");
        assert!(source.restaurant("2").await.unwrap().is_none());

        let revenue = source.revenue_series().await.unwrap();
        assert_eq!(revenue[0].label, "Mon");
        assert_eq!(revenue[0].shopee, Some(2400.0));
    }

    #[test]
    fn test_rejects_integrity_violations() {
        let bad = r#"
            [[restaurants]]
            id = "1"
            name = "Sushi Tei"
            image = "https://example.com/sushi.jpg"
            cuisine = "Japanese"
            rating = 4.8
            distance = "2.5 km"

            [[restaurants.quotes]]
            platform = "shopee"
            price = 24.50
            delivery_fee = 5.50
            original_price = 20.00
            estimated_time = "35-45 min"

            [analytics]
        "#;
        assert!(FixtureQuoteSource::from_config(fixtures(bad)).is_err());
    }
}
