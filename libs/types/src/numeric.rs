//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point
//! errors). Both types are strictly positive: a fully consumed order is
//! removed from the book, never stored at quantity zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A strictly positive limit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price, rejecting zero and negative values.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Price from an integer number of quote units. Must be nonzero.
    pub fn from_u64(value: u64) -> Self {
        debug_assert!(value > 0, "prices are strictly positive");
        Self(Decimal::from(value))
    }

    /// Get inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity, rejecting zero and negative values.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Quantity from an integer number of base units. Must be nonzero.
    pub fn from_u64(value: u64) -> Self {
        debug_assert!(value > 0, "quantities are strictly positive");
        Self(Decimal::from(value))
    }

    /// Get inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// The smaller of two quantities.
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Subtract a consumed amount. `None` once nothing positive is
    /// left, which is the signal to remove the order outright.
    pub fn checked_sub(self, consumed: Self) -> Option<Self> {
        Self::try_new(self.0 - consumed.0)
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
