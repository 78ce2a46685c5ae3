//! Storage contract shared by all backends

use thiserror::Error;
use types::ids::OrderId;
use types::market::Market;
use types::order::{LimitOrder, Side};

/// Errors surfaced by a persistence backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("malformed order id in storage: {0}")]
    MalformedId(#[from] uuid::Error),

    #[error("order content missing for {0}")]
    MissingOrder(OrderId),
}

/// Persistence contract for order book sides.
///
/// A side is stored as a tip (the best order), a tail (ordered ids of
/// everything behind the tip, best first) and one content entry per
/// order id. `put_side` rewrites tip and tail together, so a reader
/// never observes a tip and a tail from two different logical versions
/// of the side.
pub trait Backend {
    /// Overwrite one side's tip, tail and order contents with the
    /// given ordered sequence (best first; empty clears the side).
    fn put_side(
        &mut self,
        market: &Market,
        side: Side,
        orders: &[LimitOrder],
    ) -> Result<(), StorageError>;

    /// Best resting order of the side, if any.
    fn tip(&mut self, market: &Market, side: Side) -> Result<Option<LimitOrder>, StorageError>;

    /// Ids of every resting order behind the tip, best first.
    fn tail(&mut self, market: &Market, side: Side) -> Result<Vec<OrderId>, StorageError>;

    /// Content of one resting order.
    fn order(&mut self, id: &OrderId) -> Result<Option<LimitOrder>, StorageError>;

    /// Drop the content entry of a consumed or cancelled order.
    fn remove_order(&mut self, id: &OrderId) -> Result<(), StorageError>;
}

/// Backend selection, fixed for the lifetime of the engine instance.
#[derive(Debug, Clone)]
pub enum Persistence {
    /// Process-local storage; state does not survive a restart.
    Memory,
    /// External Redis server addressed by connection URL.
    Redis { url: String },
}

impl Persistence {
    /// Open the selected backend.
    pub fn open(self) -> Result<Box<dyn Backend>, StorageError> {
        match self {
            Persistence::Memory => Ok(Box::new(crate::memory::MemoryStore::new())),
            Persistence::Redis { url } => Ok(Box::new(crate::redis::RedisStore::open(&url)?)),
        }
    }
}
