// Domain error taxonomy
use crate::domain::platform::Platform;
use thiserror::Error;

/// Data-integrity violations in upstream quote/series data. These are
/// surfaced to the caller rather than recovered; the rendering layer
/// decides between an empty state and an error banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("cannot pick a best deal from an empty quote set")]
    EmptyQuoteSet,

    #[error("restaurant {0} has no quotes")]
    NoQuotes(String),

    #[error("duplicate quote for platform {0}")]
    DuplicatePlatform(Platform),

    #[error("original price {original} is below the discounted price {price} on {platform}")]
    OriginalBelowPrice {
        platform: Platform,
        original: f64,
        price: f64,
    },
}
