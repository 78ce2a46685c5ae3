//! Order model: sides, order identity, limit and market submissions

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy order
    Bid,
    /// Sell order
    Ask,
}

impl Side {
    /// The opposite side, the one an incoming order matches against.
    pub fn other(&self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }

    /// Whether price `a` is strictly more aggressive than price `b` on
    /// this side. Bids rank higher prices first, asks lower prices.
    pub fn outranks(&self, a: Price, b: Price) -> bool {
        match self {
            Side::Bid => a > b,
            Side::Ask => a < b,
        }
    }

    /// Whether an incoming limit at `limit` on this side can execute
    /// against a resting order priced at `resting`.
    pub fn crosses(&self, limit: Price, resting: Price) -> bool {
        match self {
            Side::Bid => limit >= resting,
            Side::Ask => limit <= resting,
        }
    }
}

/// Identity, side and size shared by limit and market submissions.
///
/// A market submission is exactly this: an order with no price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderInfo {
    pub id: OrderId,
    pub side: Side,
    pub quantity: Quantity,
}

impl OrderInfo {
    pub fn new(id: OrderId, side: Side, quantity: Quantity) -> Self {
        Self { id, side, quantity }
    }
}

/// A resting-capable order with a limit price: the maximum acceptable
/// execution price for a bid, the minimum for an ask.
///
/// The serialized form is the persisted order content value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LimitOrder {
    pub order_info: OrderInfo,
    pub price: Price,
}

impl LimitOrder {
    pub fn new(order_info: OrderInfo, price: Price) -> Self {
        Self { order_info, price }
    }

    pub fn id(&self) -> OrderId {
        self.order_info.id
    }

    pub fn side(&self) -> Side {
        self.order_info.side
    }

    pub fn quantity(&self) -> Quantity {
        self.order_info.quantity
    }
}

/// Whether a limit submission may take liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitOrderRequestType {
    /// Cross what it can, rest the remainder.
    Normal,
    /// Must only add liquidity; rejected if it would cross at all.
    MakerOnly,
}

/// A limit order together with its submission semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOrderRequest {
    pub order: LimitOrder,
    pub request_type: LimitOrderRequestType,
}

impl LimitOrderRequest {
    pub fn new(order: LimitOrder, request_type: LimitOrderRequestType) -> Self {
        Self {
            order,
            request_type,
        }
    }
}
