// Per-platform price quotes and the best-deal evaluator
use crate::domain::error::InvalidInput;
use crate::domain::platform::Platform;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformQuote {
    pub platform: Platform,
    pub price: f64,
    pub delivery_fee: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub estimated_time: String,
}

impl PlatformQuote {
    pub fn total_cost(&self) -> f64 {
        self.price + self.delivery_fee
    }

    /// A discounted quote must carry an original price at or above the
    /// discounted one; anything else is malformed upstream data.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if let Some(original) = self.original_price {
            if original < self.price {
                return Err(InvalidInput::OriginalBelowPrice {
                    platform: self.platform,
                    original,
                    price: self.price,
                });
            }
        }
        Ok(())
    }
}

/// Pick the quote with the smallest total cost. Ties go to the quote
/// appearing first in input order (strict `<` over a left-to-right scan).
pub fn best_deal(quotes: &[PlatformQuote]) -> Result<&PlatformQuote, InvalidInput> {
    let (first, rest) = quotes.split_first().ok_or(InvalidInput::EmptyQuoteSet)?;
    Ok(rest.iter().fold(first, |best, current| {
        if current.total_cost() < best.total_cost() {
            current
        } else {
            best
        }
    }))
}

/// Format a monetary amount as "RM 12.34", rounding half-up at the
/// second decimal. The prefix is kept even for zero.
pub fn format_currency(amount: f64) -> String {
    let rounded = (amount * 100.0 + 0.5).floor() / 100.0;
    format!("RM {:.2}", rounded)
}
