//! Exchange matching core
//!
//! Price-time priority matching over per-market order books, with
//! all-or-nothing market orders, maker-only limit orders and a
//! pluggable persistence backend.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced (FIFO at equal prices)
//! - Execution price is always the resting order's price
//! - Rejections are side-effect free
//! - Conservation of quantity across partial fills

pub mod book;
pub mod engine;
pub mod error;

pub use book::{BookSide, OrderBook};
pub use engine::{Exchange, Match};
pub use error::ExchangeError;
