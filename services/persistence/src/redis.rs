//! Redis-backed store
//!
//! Values are plain strings: the tip key holds one order id, the tail
//! key holds a JSON id list and each order id key holds the order's
//! JSON content. `put_side` rewrites every affected key in a single
//! MULTI pipeline, so tip and tail always move together.

use ::redis::{Commands, Connection};
use uuid::Uuid;

use types::ids::OrderId;
use types::market::Market;
use types::order::{LimitOrder, Side};

use crate::backend::{Backend, StorageError};
use crate::keys;

/// Backend over an external Redis server.
pub struct RedisStore {
    conn: Connection,
}

impl RedisStore {
    /// Connect to the server at `url` (e.g. `redis://127.0.0.1/`).
    pub fn open(url: &str) -> Result<Self, StorageError> {
        let client = ::redis::Client::open(url)?;
        let conn = client.get_connection()?;
        Ok(Self { conn })
    }

    fn fetch_order(&mut self, id: OrderId) -> Result<LimitOrder, StorageError> {
        let content: Option<String> = self.conn.get(keys::order_key(&id))?;
        let content = content.ok_or(StorageError::MissingOrder(id))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Backend for RedisStore {
    fn put_side(
        &mut self,
        market: &Market,
        side: Side,
        orders: &[LimitOrder],
    ) -> Result<(), StorageError> {
        let tip_key = keys::side_key(market, side, true)?;
        let tail_key = keys::side_key(market, side, false)?;

        let mut pipe = ::redis::pipe();
        pipe.atomic();
        match orders.split_first() {
            None => {
                pipe.del(&tip_key).ignore();
                pipe.del(&tail_key).ignore();
            }
            Some((tip, tail)) => {
                let tail_ids: Vec<OrderId> = tail.iter().map(|order| order.id()).collect();
                pipe.set(&tip_key, keys::order_key(&tip.id())).ignore();
                pipe.set(&tail_key, serde_json::to_string(&tail_ids)?).ignore();
            }
        }
        for order in orders {
            pipe.set(keys::order_key(&order.id()), serde_json::to_string(order)?)
                .ignore();
        }
        pipe.query::<()>(&mut self.conn)?;
        Ok(())
    }

    fn tip(&mut self, market: &Market, side: Side) -> Result<Option<LimitOrder>, StorageError> {
        let key = keys::side_key(market, side, true)?;
        let id: Option<String> = self.conn.get(&key)?;
        match id {
            None => Ok(None),
            Some(id) => {
                let id = OrderId::from_uuid(Uuid::parse_str(&id)?);
                Ok(Some(self.fetch_order(id)?))
            }
        }
    }

    fn tail(&mut self, market: &Market, side: Side) -> Result<Vec<OrderId>, StorageError> {
        let key = keys::side_key(market, side, false)?;
        let ids: Option<String> = self.conn.get(&key)?;
        match ids {
            None => Ok(Vec::new()),
            Some(ids) => Ok(serde_json::from_str(&ids)?),
        }
    }

    fn order(&mut self, id: &OrderId) -> Result<Option<LimitOrder>, StorageError> {
        let content: Option<String> = self.conn.get(keys::order_key(id))?;
        match content {
            None => Ok(None),
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
        }
    }

    fn remove_order(&mut self, id: &OrderId) -> Result<(), StorageError> {
        let _: () = self.conn.del(keys::order_key(id))?;
        Ok(())
    }
}
