//! Currencies and the markets pairing them

use serde::{Deserialize, Serialize};
use std::fmt;

/// An asset that can be traded or used as quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    BTC,
    ETH,
    LTC,
    USD,
    EUR,
    GBP,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A currency pair identifying one order book.
///
/// Equality is structural; the pair is also part of the persisted side
/// lookup key, hence the serde field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    pub base_currency: Currency,
    pub quote_currency: Currency,
}

impl Market {
    pub fn new(base_currency: Currency, quote_currency: Currency) -> Self {
        Self {
            base_currency,
            quote_currency,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base_currency, self.quote_currency)
    }
}
