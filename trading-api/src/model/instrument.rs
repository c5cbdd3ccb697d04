//! Defines the tradable instrument record.

use super::symbol::Symbol;
use crate::error::{Result, TradingError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a Stock/Equity instrument quoted at a static price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// The ticker symbol. This is the identity of the instrument and never
    /// changes once the stock is listed.
    symbol: Symbol,

    /// Price per share in dollars.
    price: Decimal,
}

impl Stock {
    /// Creates a new Stock instance.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker symbol (e.g., "AAPL").
    /// * `price` - The price per share. Must not be negative.
    ///
    /// # Returns
    ///
    /// A new `Stock`, or `TradingError::NegativePrice`.
    pub fn new(symbol: impl Into<Symbol>, price: Decimal) -> Result<Self> {
        if price < Decimal::ZERO {
            return Err(TradingError::NegativePrice(price));
        }
        Ok(Self {
            symbol: symbol.into(),
            price,
        })
    }

    /// Builds a stock from reference data already known to be valid.
    pub(crate) fn listed(symbol: &str, price: Decimal) -> Self {
        Self {
            symbol: Symbol::new(symbol),
            price,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Re-quotes the stock. The symbol is left untouched.
    pub fn set_price(&mut self, price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(TradingError::NegativePrice(price));
        }
        self.price = price;
        Ok(())
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2}", self.symbol, self.price)
    }
}
