//! Types library for the exchange matching core
//!
//! Core value types shared by the matching engine and the persistence
//! backends: identifiers, decimal numerics, markets and the order model.
//!
//! # Modules
//! - `ids`: unique order identifiers
//! - `numeric`: fixed-point decimal types (Price, Quantity)
//! - `market`: currencies and currency pairs
//! - `order`: sides, order identity, limit/market submissions

pub mod ids;
pub mod market;
pub mod numeric;
pub mod order;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::market::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
}
