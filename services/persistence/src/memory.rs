//! Process-local reference backend

use std::collections::HashMap;

use types::ids::OrderId;
use types::market::Market;
use types::order::{LimitOrder, Side};

use crate::backend::{Backend, StorageError};

type SideLocator = (Market, Side);

/// In-memory backend mirroring the key space of the Redis store with
/// plain maps instead of serialized values. Default backend and the
/// correctness reference for the contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tips: HashMap<SideLocator, OrderId>,
    tails: HashMap<SideLocator, Vec<OrderId>>,
    orders: HashMap<OrderId, LimitOrder>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryStore {
    fn put_side(
        &mut self,
        market: &Market,
        side: Side,
        orders: &[LimitOrder],
    ) -> Result<(), StorageError> {
        let locator = (*market, side);
        match orders.split_first() {
            None => {
                self.tips.remove(&locator);
                self.tails.remove(&locator);
            }
            Some((tip, tail)) => {
                self.tips.insert(locator, tip.id());
                self.tails
                    .insert(locator, tail.iter().map(|order| order.id()).collect());
            }
        }
        for order in orders {
            self.orders.insert(order.id(), *order);
        }
        Ok(())
    }

    fn tip(&mut self, market: &Market, side: Side) -> Result<Option<LimitOrder>, StorageError> {
        match self.tips.get(&(*market, side)) {
            None => Ok(None),
            Some(id) => match self.orders.get(id) {
                Some(order) => Ok(Some(*order)),
                None => Err(StorageError::MissingOrder(*id)),
            },
        }
    }

    fn tail(&mut self, market: &Market, side: Side) -> Result<Vec<OrderId>, StorageError> {
        Ok(self
            .tails
            .get(&(*market, side))
            .cloned()
            .unwrap_or_default())
    }

    fn order(&mut self, id: &OrderId) -> Result<Option<LimitOrder>, StorageError> {
        Ok(self.orders.get(id).copied())
    }

    fn remove_order(&mut self, id: &OrderId) -> Result<(), StorageError> {
        self.orders.remove(id);
        Ok(())
    }
}
