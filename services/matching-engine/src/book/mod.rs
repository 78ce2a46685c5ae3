//! Per-market order book

pub mod side;

pub use side::BookSide;

use std::ops::Index;

use types::market::Market;
use types::order::Side;

/// Both sides of one market's book.
///
/// This is a read snapshot: no order ever appears on both sides, and
/// crossing is resolved at submission time by the exchange, which is
/// the only mutator.
#[derive(Debug, Clone)]
pub struct OrderBook {
    market: Market,
    bid: BookSide,
    ask: BookSide,
}

impl OrderBook {
    /// An empty book for a market.
    pub fn new(market: Market) -> Self {
        Self {
            market,
            bid: BookSide::new(Side::Bid),
            ask: BookSide::new(Side::Ask),
        }
    }

    pub(crate) fn from_sides(market: Market, bid: BookSide, ask: BookSide) -> Self {
        Self { market, bid, ask }
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    /// Snapshot of one side's ordered sequence.
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Bid => &self.bid,
            Side::Ask => &self.ask,
        }
    }
}

impl Index<Side> for OrderBook {
    type Output = BookSide;

    fn index(&self, side: Side) -> &BookSide {
        self.side(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::market::Currency;

    #[test]
    fn new_book_has_two_empty_sides() {
        let book = OrderBook::new(Market::new(Currency::BTC, Currency::USD));

        assert!(book[Side::Bid].is_empty());
        assert!(book[Side::Ask].is_empty());
        assert_eq!(book[Side::Bid].side(), Side::Bid);
        assert_eq!(book[Side::Ask].side(), Side::Ask);
    }
}
