// Restaurant domain model - the subject being priced across platforms
use crate::domain::error::InvalidInput;
use crate::domain::platform::Platform;
use crate::domain::quote::PlatformQuote;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    pub rating: f64,
    pub distance: String,
    pub quotes: Vec<PlatformQuote>,
}

impl Restaurant {
    /// Build a restaurant from upstream data, enforcing the quote-set
    /// invariants: at least one quote, at most one quote per platform,
    /// and per-quote price integrity.
    pub fn new(
        id: String,
        name: String,
        image: String,
        cuisine: String,
        rating: f64,
        distance: String,
        quotes: Vec<PlatformQuote>,
    ) -> Result<Self, InvalidInput> {
        if quotes.is_empty() {
            return Err(InvalidInput::NoQuotes(id));
        }
        let mut seen: HashSet<Platform> = HashSet::new();
        for quote in &quotes {
            if !seen.insert(quote.platform) {
                return Err(InvalidInput::DuplicatePlatform(quote.platform));
            }
            quote.validate()?;
        }
        Ok(Self {
            id,
            name,
            image,
            cuisine,
            rating,
            distance,
            quotes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(platform: Platform, price: f64) -> PlatformQuote {
        PlatformQuote {
            platform,
            price,
            delivery_fee: 3.00,
            original_price: None,
            estimated_time: "20-30 min".to_string(),
        }
    }

    fn restaurant(quotes: Vec<PlatformQuote>) -> Result<Restaurant, InvalidInput> {
        Restaurant::new(
            "1".to_string(),
            "Warong Nasi Lemak".to_string(),
            "https://example.com/nasi-lemak.jpg".to_string(),
            "Malaysian".to_string(),
            4.7,
            "1.2 km".to_string(),
            quotes,
        )
    }

    #[test]
    fn test_rejects_empty_quote_set() {
        assert_eq!(
            restaurant(vec![]),
            Err(InvalidInput::NoQuotes("1".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_platform() {
        let result = restaurant(vec![
            quote(Platform::Grab, 12.90),
            quote(Platform::Grab, 11.00),
        ]);
        assert_eq!(result, Err(InvalidInput::DuplicatePlatform(Platform::Grab)));
    }

    #[test]
    fn test_accepts_one_quote_per_platform() {
        let result = restaurant(vec![
            quote(Platform::Grab, 12.90),
            quote(Platform::Foodpanda, 12.50),
        ]);
        assert!(result.is_ok());
    }
}
