// Comparison service - use cases for the consumer screens
use crate::application::quote_source::QuoteSource;
use crate::domain::platform::{platform_display, Platform};
use crate::domain::quote::{best_deal, format_currency, PlatformQuote};
use crate::domain::restaurant::Restaurant;
use serde::Serialize;
use std::sync::Arc;

/// Card-level view for the restaurant list: identity metadata plus the
/// pre-computed cheapest total for the "from RM x" badge.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    pub rating: f64,
    pub distance: String,
    pub cheapest_platform: Platform,
    pub cheapest_total: String,
    pub platform_count: usize,
}

/// Full price-comparison view for one restaurant, one row per platform.
#[derive(Debug, Clone, Serialize)]
pub struct PriceComparison {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    pub rating: f64,
    pub distance: String,
    pub rows: Vec<QuoteRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteRow {
    pub platform: Platform,
    pub label: String,
    pub color: String,
    pub price: String,
    pub delivery_fee: String,
    pub total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub estimated_time: String,
    pub best_deal: bool,
}

#[derive(Clone)]
pub struct ComparisonService {
    source: Arc<dyn QuoteSource>,
}

impl ComparisonService {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Restaurant list, optionally narrowed by a case-insensitive name
    /// search and an exact cuisine filter.
    pub async fn search(
        &self,
        query: Option<&str>,
        cuisine: Option<&str>,
    ) -> anyhow::Result<Vec<RestaurantSummary>> {
        let restaurants = self.source.list_restaurants().await?;
        let needle = query.map(str::to_lowercase);

        let mut summaries = Vec::new();
        for restaurant in restaurants {
            if let Some(needle) = &needle {
                if !restaurant.name.to_lowercase().contains(needle) {
                    continue;
                }
            }
            if let Some(cuisine) = cuisine {
                if !restaurant.cuisine.eq_ignore_ascii_case(cuisine) {
                    continue;
                }
            }
            summaries.push(Self::summarize(restaurant)?);
        }
        Ok(summaries)
    }

    /// The comparison view for one restaurant, or None for an unknown id.
    pub async fn compare(&self, id: &str) -> anyhow::Result<Option<PriceComparison>> {
        let Some(restaurant) = self.source.restaurant(id).await? else {
            return Ok(None);
        };

        let best = best_deal(&restaurant.quotes)?.clone();
        let rows = restaurant
            .quotes
            .iter()
            .map(|quote| Self::row(quote, quote == &best))
            .collect();

        Ok(Some(PriceComparison {
            id: restaurant.id,
            name: restaurant.name,
            image: restaurant.image,
            cuisine: restaurant.cuisine,
            rating: restaurant.rating,
            distance: restaurant.distance,
            rows,
        }))
    }

    fn summarize(restaurant: Restaurant) -> anyhow::Result<RestaurantSummary> {
        let best = best_deal(&restaurant.quotes)?;
        Ok(RestaurantSummary {
            cheapest_platform: best.platform,
            cheapest_total: format_currency(best.total_cost()),
            platform_count: restaurant.quotes.len(),
            id: restaurant.id,
            name: restaurant.name,
            image: restaurant.image,
            cuisine: restaurant.cuisine,
            rating: restaurant.rating,
            distance: restaurant.distance,
        })
    }

    fn row(quote: &PlatformQuote, best_deal: bool) -> QuoteRow {
        let display = platform_display(quote.platform.key());
        QuoteRow {
            platform: quote.platform,
            label: display.label,
            color: display.color,
            price: format_currency(quote.price),
            delivery_fee: format_currency(quote.delivery_fee),
            total: format_currency(quote.total_cost()),
            original_price: quote.original_price.map(format_currency),
            estimated_time: quote.estimated_time.clone(),
            best_deal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::SeriesPoint;
    use async_trait::async_trait;

    struct FixedSource {
        restaurants: Vec<Restaurant>,
    }

    #[async_trait]
    impl QuoteSource for FixedSource {
        async fn list_restaurants(&self) -> anyhow::Result<Vec<Restaurant>> {
            Ok(self.restaurants.clone())
        }

        async fn restaurant(&self, id: &str) -> anyhow::Result<Option<Restaurant>> {
            Ok(self.restaurants.iter().find(|r| r.id == id).cloned())
        }

        async fn revenue_series(&self) -> anyhow::Result<Vec<SeriesPoint>> {
            Ok(vec![])
        }

        async fn orders_series(&self) -> anyhow::Result<Vec<SeriesPoint>> {
            Ok(vec![])
        }
    }

    fn quote(
        platform: Platform,
        price: f64,
        delivery_fee: f64,
        original_price: Option<f64>,
    ) -> PlatformQuote {
        PlatformQuote {
            platform,
            price,
            delivery_fee,
            original_price,
            estimated_time: "25-35 min".to_string(),
        }
    }

    fn restaurant(id: &str, name: &str, cuisine: &str, quotes: Vec<PlatformQuote>) -> Restaurant {
        Restaurant::new(
            id.to_string(),
            name.to_string(),
            "https://example.com/food.jpg".to_string(),
            cuisine.to_string(),
            4.5,
            "1.2 km".to_string(),
            quotes,
        )
        .unwrap()
    }

    fn service() -> ComparisonService {
        ComparisonService::new(Arc::new(FixedSource {
            restaurants: vec![
                restaurant(
                    "1",
                    "Warong Nasi Lemak",
                    "Malaysian",
                    vec![
                        quote(Platform::Grab, 12.90, 3.00, None),
                        quote(Platform::Shopee, 11.50, 5.00, None),
                        quote(Platform::Foodpanda, 12.50, 2.50, None),
                    ],
                ),
                restaurant(
                    "3",
                    "Sushi Tei",
                    "Japanese",
                    vec![
                        quote(Platform::Grab, 25.90, 4.00, None),
                        quote(Platform::Shopee, 24.50, 5.50, Some(28.50)),
                        quote(Platform::Foodpanda, 26.50, 3.50, None),
                    ],
                ),
            ],
        }))
    }

    #[tokio::test]
    async fn test_compare_flags_cheapest_total() {
        let view = service().compare("1").await.unwrap().unwrap();
        assert_eq!(view.rows.len(), 3);

        let winner = view.rows.iter().find(|r| r.best_deal).unwrap();
        assert_eq!(winner.platform, Platform::Foodpanda);
        assert_eq!(winner.total, "RM 15.00");
        assert_eq!(view.rows.iter().filter(|r| r.best_deal).count(), 1);
    }

    #[tokio::test]
    async fn test_compare_keeps_original_price_on_discounted_row() {
        let view = service().compare("3").await.unwrap().unwrap();

        let winner = view.rows.iter().find(|r| r.best_deal).unwrap();
        assert_eq!(winner.platform, Platform::Grab);
        assert_eq!(winner.total, "RM 29.90");

        let shopee = view
            .rows
            .iter()
            .find(|r| r.platform == Platform::Shopee)
            .unwrap();
        assert_eq!(shopee.original_price.as_deref(), Some("RM 28.50"));
        assert!(!shopee.best_deal);
    }

    #[tokio::test]
    async fn test_compare_unknown_id() {
        assert!(service().compare("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_by_name_and_cuisine() {
        let service = service();

        let all = service.search(None, None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].cheapest_total, "RM 15.00");
        assert_eq!(all[0].cheapest_platform, Platform::Foodpanda);

        let by_name = service.search(Some("sushi"), None).await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "3");

        let by_cuisine = service.search(None, Some("Malaysian")).await.unwrap();
        assert_eq!(by_cuisine.len(), 1);
        assert_eq!(by_cuisine[0].id, "1");

        let none = service.search(Some("laksa"), Some("Japanese")).await.unwrap();
        assert!(none.is_empty());
    }
}
