//! The exchange: request routing, id uniqueness, crossing, persistence
//!
//! Mutating operations against one market must be serialized by the
//! caller; independent markets are independent. Every operation runs
//! its matching on working copies loaded from the backend, writes the
//! backend only once the outcome is decided, and commits the live-order
//! registry last, so a rejected or failed call leaves no trace.

use std::collections::HashMap;

use tracing::debug;

use persistence::{Backend, Persistence, StorageError};
use types::ids::OrderId;
use types::market::Market;
use types::numeric::Quantity;
use types::order::{LimitOrderRequest, LimitOrderRequestType, OrderInfo, Side};

use crate::book::{BookSide, OrderBook};
use crate::error::ExchangeError;

/// Outcome of a submission that executed against resting liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// The incoming order's entire quantity executed.
    Full,
    /// This much executed; the remainder now rests (limit orders only).
    Partial(Quantity),
}

/// Where a live order currently rests, for cancel routing.
#[derive(Debug, Clone, Copy)]
struct Location {
    market: Market,
    side: Side,
}

/// The matching engine. Owns every resting order, routes submissions
/// to the right market's book and enforces engine-wide id uniqueness.
pub struct Exchange {
    backend: Box<dyn Backend>,
    live_orders: HashMap<OrderId, Location>,
}

impl Exchange {
    /// Create an exchange over the selected persistence backend. The
    /// selection is fixed for the lifetime of the instance.
    pub fn new(persistence: Persistence) -> Result<Self, ExchangeError> {
        Ok(Self::with_backend(persistence.open()?))
    }

    /// Create an exchange over an already-open backend.
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            live_orders: HashMap::new(),
        }
    }

    /// Snapshot of one market's book. Books are created lazily, so an
    /// unknown market reads back as two empty sides.
    pub fn order_book(&mut self, market: &Market) -> Result<OrderBook, ExchangeError> {
        let bid = self.load_side(market, Side::Bid)?;
        let ask = self.load_side(market, Side::Ask)?;
        Ok(OrderBook::from_sides(*market, bid, ask))
    }

    /// Submit a limit order.
    ///
    /// The order crosses the opposing side tip-first for as long as its
    /// limit allows, each tranche executing at the resting order's
    /// price; any remainder rests on its own side. Returns `None` when
    /// nothing executed, `Match::Full` when the whole quantity did, and
    /// `Match::Partial` with the executed amount otherwise.
    pub fn send_limit_order(
        &mut self,
        request: LimitOrderRequest,
        market: &Market,
    ) -> Result<Option<Match>, ExchangeError> {
        let order = request.order;
        let id = order.id();
        if self.live_orders.contains_key(&id) {
            return Err(ExchangeError::OrderAlreadyExists(id));
        }
        let side = order.side();

        let mut opposing = self.load_side(market, side.other())?;
        let mut consumed: Vec<OrderId> = Vec::new();
        let mut matched: Option<Quantity> = None;
        let mut remaining = Some(order.quantity());

        while let (Some(rest), Some(tip)) = (remaining, opposing.tip().copied()) {
            if !side.crosses(order.price, tip.price) {
                break;
            }

            // Price priority: the trade executes at the resting price.
            let tranche = rest.min(tip.quantity());
            debug!(order = %id, against = %tip.id(), price = %tip.price, quantity = %tranche, "crossed");
            matched = Some(match matched {
                None => tranche,
                Some(total) => total + tranche,
            });

            match tip.quantity().checked_sub(tranche) {
                Some(left) => opposing.reduce_tip(left),
                None => {
                    opposing.pop_tip();
                    consumed.push(tip.id());
                }
            }
            remaining = rest.checked_sub(tranche);
        }

        if request.request_type == LimitOrderRequestType::MakerOnly && matched.is_some() {
            return Err(ExchangeError::MatchExpectationsUnmet);
        }

        let mut own = self.load_side(market, side)?;
        if let Some(rest) = remaining {
            let mut resting = order;
            resting.order_info.quantity = rest;
            own.insert(resting);
        }

        if matched.is_some() {
            self.backend.put_side(market, side.other(), opposing.orders())?;
            for gone in &consumed {
                self.backend.remove_order(gone)?;
            }
        }
        if remaining.is_some() {
            self.backend.put_side(market, side, own.orders())?;
        }

        for gone in &consumed {
            self.live_orders.remove(gone);
        }
        if remaining.is_some() {
            self.live_orders.insert(
                id,
                Location {
                    market: *market,
                    side,
                },
            );
            debug!(order = %id, market = %market, "resting");
        }

        Ok(match (matched, remaining) {
            (None, _) => None,
            (Some(_), None) => Some(Match::Full),
            (Some(total), Some(_)) => Some(Match::Partial(total)),
        })
    }

    /// Submit a market order: execute the full quantity against the
    /// opposing side or fail without touching anything.
    ///
    /// The opposing side's total liquidity is checked before any
    /// consumption, so `LiquidityProblem` leaves the book byte-for-byte
    /// intact. Market orders never rest.
    pub fn send_market_order(
        &mut self,
        order: OrderInfo,
        market: &Market,
    ) -> Result<Match, ExchangeError> {
        if self.live_orders.contains_key(&order.id) {
            return Err(ExchangeError::OrderAlreadyExists(order.id));
        }

        let mut opposing = self.load_side(market, order.side.other())?;
        if opposing.liquidity() < order.quantity.as_decimal() {
            return Err(ExchangeError::LiquidityProblem);
        }

        let mut consumed: Vec<OrderId> = Vec::new();
        let mut remaining = Some(order.quantity);
        while let (Some(rest), Some(tip)) = (remaining, opposing.tip().copied()) {
            let tranche = rest.min(tip.quantity());
            debug!(order = %order.id, against = %tip.id(), price = %tip.price, quantity = %tranche, "crossed");
            match tip.quantity().checked_sub(tranche) {
                Some(left) => opposing.reduce_tip(left),
                None => {
                    opposing.pop_tip();
                    consumed.push(tip.id());
                }
            }
            remaining = rest.checked_sub(tranche);
        }
        // The liquidity pre-check guarantees full execution.
        debug_assert!(remaining.is_none());

        self.backend.put_side(market, order.side.other(), opposing.orders())?;
        for gone in &consumed {
            self.backend.remove_order(gone)?;
        }
        for gone in &consumed {
            self.live_orders.remove(gone);
        }

        Ok(Match::Full)
    }

    /// Cancel a resting limit order by id, wherever it rests.
    pub fn cancel_limit_order(&mut self, id: &OrderId) -> Result<(), ExchangeError> {
        let location = *self
            .live_orders
            .get(id)
            .ok_or(ExchangeError::OrderNotFound(*id))?;

        let mut side = self.load_side(&location.market, location.side)?;
        if side.remove(id).is_none() {
            return Err(ExchangeError::OrderNotFound(*id));
        }

        self.backend
            .put_side(&location.market, location.side, side.orders())?;
        self.backend.remove_order(id)?;
        self.live_orders.remove(id);
        debug!(order = %id, market = %location.market, "cancelled");
        Ok(())
    }

    fn load_side(&mut self, market: &Market, side: Side) -> Result<BookSide, StorageError> {
        let Some(tip) = self.backend.tip(market, side)? else {
            return Ok(BookSide::new(side));
        };
        let mut orders = vec![tip];
        for id in self.backend.tail(market, side)? {
            let order = self
                .backend
                .order(&id)?
                .ok_or(StorageError::MissingOrder(id))?;
            orders.push(order);
        }
        Ok(BookSide::from_orders(side, orders))
    }
}
