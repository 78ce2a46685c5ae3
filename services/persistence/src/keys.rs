//! Key model for the side/order key-value representation
//!
//! A side lookup key is the JSON form of `(market, side, tip-flag)`.
//! With `Tip = true` it addresses the single best order id, with
//! `Tip = false` the ordered id list of everything behind it. A second
//! key space maps each order id string to the order's JSON content.

use serde::Serialize;
use types::ids::OrderId;
use types::market::Market;
use types::order::Side;

use crate::backend::StorageError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SideQuery<'a> {
    market: &'a Market,
    side: Side,
    tip: bool,
}

/// Serialized lookup key for one side of one market's book.
pub fn side_key(market: &Market, side: Side, tip: bool) -> Result<String, StorageError> {
    Ok(serde_json::to_string(&SideQuery { market, side, tip })?)
}

/// Key addressing one order's serialized content.
pub fn order_key(id: &OrderId) -> String {
    id.to_string()
}
