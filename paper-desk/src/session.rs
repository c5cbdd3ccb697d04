//! A single user's trading session.
//!
//! The session owns the catalog and the holdings ledger outright; the desk
//! holds exactly one and mutates it from a single thread.

use crate::config::QuantityPolicy;
use log::{debug, info};
use rust_decimal::Decimal;
use trading::{Catalog, Holdings, Quantity, Result, Symbol, TradingError};

/// Outcome of an accepted trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub symbol: Symbol,
    /// Shares traded, as requested.
    pub quantity: i64,
    /// Holding left in the ledger after the trade.
    pub position: i64,
}

pub struct Session {
    catalog: Catalog,
    holdings: Holdings,
    quantity_policy: QuantityPolicy,
}

impl Session {
    pub fn new(catalog: Catalog, quantity_policy: QuantityPolicy) -> Self {
        Self {
            catalog,
            holdings: Holdings::new(),
            quantity_policy,
        }
    }

    /// A fresh session over the default listings with an empty ledger.
    pub fn seeded(quantity_policy: QuantityPolicy) -> Self {
        Self::new(Catalog::seeded(), quantity_policy)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }

    /// Buys `quantity` shares of a listed stock.
    ///
    /// Unlisted symbols are refused before the ledger is touched.
    pub fn buy(&mut self, raw_symbol: &str, quantity: i64) -> Result<Fill> {
        let symbol = Symbol::normalize(raw_symbol);
        if !self.catalog.contains(symbol.as_str()) {
            debug!("Buy refused: {} is not listed", symbol);
            return Err(TradingError::UnknownSymbol(symbol));
        }
        let quantity = self.checked_quantity(quantity)?;

        let position = self.holdings.buy(symbol.clone(), quantity)?;
        info!("Bought {} {} (holding {})", quantity, symbol, position);
        Ok(Fill {
            symbol,
            quantity,
            position,
        })
    }

    /// Sells `quantity` shares. The ledger alone decides whether the sale
    /// goes through; the catalog is not consulted.
    pub fn sell(&mut self, raw_symbol: &str, quantity: i64) -> Result<Fill> {
        let symbol = Symbol::normalize(raw_symbol);
        let quantity = self.checked_quantity(quantity)?;

        match self.holdings.sell(symbol.as_str(), quantity) {
            Ok(position) => {
                info!("Sold {} {} (holding {})", quantity, symbol, position);
                Ok(Fill {
                    symbol,
                    quantity,
                    position,
                })
            }
            Err(e) => {
                debug!("Sell of {} {} refused: {:?}", quantity, symbol, e);
                Err(e)
            }
        }
    }

    /// Mark-to-market value of the ledger at catalog prices.
    pub fn portfolio_value(&self) -> Decimal {
        self.holdings.value(&self.catalog)
    }

    fn checked_quantity(&self, quantity: i64) -> Result<i64> {
        match self.quantity_policy {
            QuantityPolicy::Strict => Quantity::new(quantity).map(Quantity::get),
            QuantityPolicy::Permissive => Ok(quantity),
        }
    }
}
