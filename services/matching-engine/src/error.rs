//! Error taxonomy for the exchange
//!
//! Every variant except `Storage` is a logical rejection checked
//! before any mutation, so callers may retry or drop them freely.

use thiserror::Error;
use types::ids::OrderId;

use persistence::StorageError;

/// Errors surfaced by exchange operations.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The submitted order id is still live somewhere in the engine.
    #[error("order {0} already exists")]
    OrderAlreadyExists(OrderId),

    /// A maker-only limit order would have taken liquidity.
    #[error("maker-only order would cross resting liquidity")]
    MatchExpectationsUnmet,

    /// A market order asked for more than the opposing side holds.
    #[error("not enough liquidity to fill the market order")]
    LiquidityProblem,

    /// The order id addressed by a cancellation is not live.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    /// The persistence backend failed; the operation was rejected as a
    /// whole rather than committed partially.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
