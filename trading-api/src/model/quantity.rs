use crate::error::{Result, TradingError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive number of shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(shares: i64) -> Result<Self> {
        if shares <= 0 {
            return Err(TradingError::InvalidQuantity(shares));
        }
        Ok(Self(shares))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = TradingError;

    fn try_from(shares: i64) -> Result<Self> {
        Self::new(shares)
    }
}

impl From<Quantity> for i64 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
