//! Maker-only (post-only) order scenarios, run against the in-memory
//! backend.

use matching_engine::{Exchange, ExchangeError};
use persistence::Persistence;
use types::ids::OrderId;
use types::market::{Currency, Market};
use types::numeric::{Price, Quantity};
use types::order::{LimitOrder, LimitOrderRequest, LimitOrderRequestType, OrderInfo, Side};

fn exchange() -> Exchange {
    Exchange::new(Persistence::Memory).unwrap()
}

fn btc_usd() -> Market {
    Market::new(Currency::BTC, Currency::USD)
}

fn limit(side: Side, price: u64, quantity: u64) -> LimitOrder {
    LimitOrder::new(
        OrderInfo::new(OrderId::new(), side, Quantity::from_u64(quantity)),
        Price::from_u64(price),
    )
}

fn send_maker_only(
    exchange: &mut Exchange,
    order: LimitOrder,
    market: &Market,
) -> Result<(), ExchangeError> {
    let outcome = exchange.send_limit_order(
        LimitOrderRequest::new(order, LimitOrderRequestType::MakerOnly),
        market,
    )?;
    assert_eq!(outcome, None, "maker-only order can never match");
    Ok(())
}

fn rests_like_a_normal_order(side: Side) {
    let mut exchange = exchange();
    let market = btc_usd();

    let order = limit(side, 10_000, 1);
    send_maker_only(&mut exchange, order, &market).unwrap();

    let book = exchange.order_book(&market).unwrap();
    assert!(book[side.other()].is_empty());
    assert_eq!(book[side].len(), 1);

    let resting = book[side].tip().unwrap();
    assert_eq!(resting.id(), order.id());
    assert_eq!(resting.price, order.price);
    assert_eq!(resting.quantity(), order.quantity());
}

#[test]
fn maker_only_order_rests_like_a_normal_order() {
    rests_like_a_normal_order(Side::Bid);
    rests_like_a_normal_order(Side::Ask);
}

fn accumulates_on_its_own_side(side: Side) {
    let mut exchange = exchange();
    let market = btc_usd();

    send_maker_only(&mut exchange, limit(side, 10_000, 1), &market).unwrap();
    send_maker_only(&mut exchange, limit(side, 10_001, 2), &market).unwrap();
    send_maker_only(&mut exchange, limit(side, 10_001, 3), &market).unwrap();

    let book = exchange.order_book(&market).unwrap();
    assert!(book[side.other()].is_empty());
    assert_eq!(book[side].len(), 3);
}

#[test]
fn maker_only_orders_accumulate_on_their_side() {
    accumulates_on_its_own_side(Side::Bid);
    accumulates_on_its_own_side(Side::Ask);
}

fn rejected_when_it_would_cross(side: Side) {
    let mut exchange = exchange();
    let market = btc_usd();

    let resting = limit(side, 10_000, 1);
    send_maker_only(&mut exchange, resting, &market).unwrap();

    let taker = limit(side.other(), 10_000, 1);
    let error = send_maker_only(&mut exchange, taker, &market).unwrap_err();
    assert!(matches!(error, ExchangeError::MatchExpectationsUnmet));

    // The resting order was not consumed and the taker did not rest.
    let book = exchange.order_book(&market).unwrap();
    assert!(book[side.other()].is_empty());
    assert_eq!(book[side].len(), 1);

    let untouched = book[side].tip().unwrap();
    assert_eq!(untouched.id(), resting.id());
    assert_eq!(untouched.quantity(), resting.quantity());
}

#[test]
fn maker_only_order_that_would_cross_is_rejected() {
    rejected_when_it_would_cross(Side::Bid);
    rejected_when_it_would_cross(Side::Ask);
}

fn rejected_even_on_a_partial_cross(side: Side) {
    let mut exchange = exchange();
    let market = btc_usd();

    let resting = limit(side, 10_000, 1);
    send_maker_only(&mut exchange, resting, &market).unwrap();

    // Would partially cross and rest the remainder; still rejected.
    let taker = limit(side.other(), 10_000, 5);
    let error = send_maker_only(&mut exchange, taker, &market).unwrap_err();
    assert!(matches!(error, ExchangeError::MatchExpectationsUnmet));

    let book = exchange.order_book(&market).unwrap();
    assert!(book[side.other()].is_empty());
    assert_eq!(book[side].len(), 1);
    assert_eq!(book[side].tip().unwrap().quantity(), resting.quantity());
}

#[test]
fn maker_only_order_that_would_partially_cross_is_rejected() {
    rejected_even_on_a_partial_cross(Side::Bid);
    rejected_even_on_a_partial_cross(Side::Ask);
}
