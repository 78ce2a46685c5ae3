//! One side of one market's order book
//!
//! Orders are kept best price first; orders at the same price keep
//! their arrival order (FIFO). The full ordered sequence doubles as
//! the persisted representation of the side.

use rust_decimal::Decimal;
use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::{LimitOrder, Side};

/// Ordered sequence of resting orders for one `(Market, Side)`.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    orders: Vec<LimitOrder>,
}

impl BookSide {
    /// Create an empty side.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            orders: Vec::new(),
        }
    }

    /// Rebuild a side from an already-ordered sequence (best first),
    /// as read back from a persistence backend.
    pub fn from_orders(side: Side, orders: Vec<LimitOrder>) -> Self {
        Self { side, orders }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Best resting order, the first to match.
    pub fn tip(&self) -> Option<&LimitOrder> {
        self.orders.first()
    }

    /// Everything behind the tip, still best first.
    pub fn tail(&self) -> &[LimitOrder] {
        self.orders.get(1..).unwrap_or(&[])
    }

    /// Full ordered sequence; also the persisted representation.
    pub fn orders(&self) -> &[LimitOrder] {
        &self.orders
    }

    pub fn iter(&self) -> impl Iterator<Item = &LimitOrder> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total resting quantity on this side.
    pub fn liquidity(&self) -> Decimal {
        self.orders
            .iter()
            .map(|order| order.quantity().as_decimal())
            .sum()
    }

    /// Insert a resting order at its price-time position: before the
    /// first order it strictly outranks on price, after every order at
    /// its own price.
    pub fn insert(&mut self, order: LimitOrder) {
        debug_assert_eq!(order.side(), self.side);
        let at = self
            .orders
            .iter()
            .position(|resting| self.side.outranks(order.price, resting.price))
            .unwrap_or(self.orders.len());
        self.orders.insert(at, order);
    }

    /// Remove a resting order by id.
    pub fn remove(&mut self, id: &OrderId) -> Option<LimitOrder> {
        let at = self.orders.iter().position(|order| order.id() == *id)?;
        Some(self.orders.remove(at))
    }

    /// Take the best order off the side.
    pub fn pop_tip(&mut self) -> Option<LimitOrder> {
        if self.orders.is_empty() {
            None
        } else {
            Some(self.orders.remove(0))
        }
    }

    /// Shrink the best order to `remaining` after a partial fill.
    pub fn reduce_tip(&mut self, remaining: Quantity) {
        if let Some(tip) = self.orders.first_mut() {
            tip.order_info.quantity = remaining;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::Price;
    use types::order::OrderInfo;

    fn order(side: Side, price: u64, quantity: u64) -> LimitOrder {
        LimitOrder::new(
            OrderInfo::new(OrderId::new(), side, Quantity::from_u64(quantity)),
            Price::from_u64(price),
        )
    }

    fn prices(side: &BookSide) -> Vec<Price> {
        side.iter().map(|o| o.price).collect()
    }

    #[test]
    fn bids_sort_highest_price_first() {
        let mut side = BookSide::new(Side::Bid);
        side.insert(order(Side::Bid, 10_000, 1));
        side.insert(order(Side::Bid, 10_002, 1));
        side.insert(order(Side::Bid, 10_001, 1));

        let expected: Vec<Price> = [10_002, 10_001, 10_000]
            .iter()
            .map(|p| Price::from_u64(*p))
            .collect();
        assert_eq!(prices(&side), expected);
        assert_eq!(side.tip().unwrap().price, Price::from_u64(10_002));
    }

    #[test]
    fn asks_sort_lowest_price_first() {
        let mut side = BookSide::new(Side::Ask);
        side.insert(order(Side::Ask, 10_000, 1));
        side.insert(order(Side::Ask, 9_998, 1));
        side.insert(order(Side::Ask, 9_999, 1));

        let expected: Vec<Price> = [9_998, 9_999, 10_000]
            .iter()
            .map(|p| Price::from_u64(*p))
            .collect();
        assert_eq!(prices(&side), expected);
        assert_eq!(side.tip().unwrap().price, Price::from_u64(9_998));
    }

    #[test]
    fn equal_prices_keep_arrival_order() {
        let first = order(Side::Bid, 10_000, 1);
        let second = order(Side::Bid, 10_000, 2);
        let third = order(Side::Bid, 10_000, 3);

        let mut side = BookSide::new(Side::Bid);
        side.insert(first);
        side.insert(second);
        side.insert(third);

        let ids: Vec<_> = side.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![first.id(), second.id(), third.id()]);
    }

    #[test]
    fn tail_excludes_the_tip() {
        let mut side = BookSide::new(Side::Ask);
        side.insert(order(Side::Ask, 9_999, 1));
        side.insert(order(Side::Ask, 10_000, 1));

        assert_eq!(side.len(), 2);
        assert_eq!(side.tail().len(), 1);
        assert_eq!(side.tail()[0].price, Price::from_u64(10_000));
    }

    #[test]
    fn remove_takes_out_exactly_one_order() {
        let stays = order(Side::Bid, 10_000, 1);
        let goes = order(Side::Bid, 10_000, 1);

        let mut side = BookSide::new(Side::Bid);
        side.insert(stays);
        side.insert(goes);

        assert_eq!(side.remove(&goes.id()).map(|o| o.id()), Some(goes.id()));
        assert!(side.remove(&goes.id()).is_none());
        assert_eq!(side.len(), 1);
        assert_eq!(side.tip().map(|o| o.id()), Some(stays.id()));
    }

    #[test]
    fn liquidity_sums_all_resting_quantity() {
        let mut side = BookSide::new(Side::Ask);
        side.insert(order(Side::Ask, 10_000, 2));
        side.insert(order(Side::Ask, 10_001, 3));

        assert_eq!(side.liquidity(), Decimal::from(5));
    }

    #[test]
    fn reduce_tip_keeps_position() {
        let mut side = BookSide::new(Side::Bid);
        let first = order(Side::Bid, 10_000, 5);
        side.insert(first);
        side.insert(order(Side::Bid, 10_000, 1));

        side.reduce_tip(Quantity::from_u64(2));

        assert_eq!(side.tip().map(|o| o.id()), Some(first.id()));
        assert_eq!(side.tip().unwrap().quantity(), Quantity::from_u64(2));
    }
}
