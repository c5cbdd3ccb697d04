use super::catalog::Catalog;
use super::symbol::Symbol;
use crate::error::{Result, TradingError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The holdings ledger: owned share count per symbol.
///
/// A symbol whose count reaches exactly zero is dropped from the ledger, so
/// with positive trade sizes every entry present is a non-zero holding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Holdings {
    holdings: HashMap<Symbol, i64>,
}

impl Holdings {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            holdings: HashMap::new(),
        }
    }

    /// Current holding for `symbol`, zero when absent.
    pub fn quantity(&self, symbol: &str) -> i64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Adds `quantity` to the holding and returns the new count.
    ///
    /// No catalog check and no sign check happen here: the caller decides
    /// which symbols and sizes are tradable. A non-positive `quantity` is
    /// applied as plain arithmetic. A sum that does not fit an `i64` fails
    /// with `QuantityOverflow` and leaves the ledger untouched.
    pub fn buy(&mut self, symbol: Symbol, quantity: i64) -> Result<i64> {
        let held = self.quantity(symbol.as_str());
        let Some(position) = held.checked_add(quantity) else {
            return Err(TradingError::QuantityOverflow {
                symbol,
                held,
                requested: quantity,
            });
        };

        if position == 0 {
            self.holdings.remove(&symbol);
        } else {
            self.holdings.insert(symbol, position);
        }
        Ok(position)
    }

    /// Removes `quantity` shares and returns what is left.
    ///
    /// Fails without touching the ledger when the symbol is not held, the
    /// holding is smaller than the request, or the difference overflows.
    pub fn sell(&mut self, symbol: &str, quantity: i64) -> Result<i64> {
        let Some(held) = self.holdings.get_mut(symbol) else {
            return Err(TradingError::NotHeld(Symbol::new(symbol)));
        };
        if *held < quantity {
            return Err(TradingError::InsufficientQuantity {
                symbol: Symbol::new(symbol),
                held: *held,
                requested: quantity,
            });
        }

        let Some(remaining) = held.checked_sub(quantity) else {
            return Err(TradingError::QuantityOverflow {
                symbol: Symbol::new(symbol),
                held: *held,
                requested: quantity,
            });
        };

        *held = remaining;
        if remaining == 0 {
            self.holdings.remove(symbol);
        }
        Ok(remaining)
    }

    /// Every (symbol, count) pair, in ledger order.
    pub fn snapshot(&self) -> Vec<(Symbol, i64)> {
        self.holdings
            .iter()
            .map(|(symbol, quantity)| (symbol.clone(), *quantity))
            .collect()
    }

    /// Mark-to-market value against catalog prices.
    ///
    /// Held symbols missing from the catalog contribute nothing.
    pub fn value(&self, catalog: &Catalog) -> Decimal {
        let mut total = Decimal::ZERO;
        for (symbol, quantity) in &self.holdings {
            if let Some(stock) = catalog.lookup(symbol.as_str()) {
                total += stock.price() * Decimal::from(*quantity);
            }
        }
        total
    }

    /// True when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Number of symbols held.
    pub fn len(&self) -> usize {
        self.holdings.len()
    }
}
