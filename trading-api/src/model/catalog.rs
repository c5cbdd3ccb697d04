//! In-memory catalog of tradable instruments.
//!
//! The catalog is reference data: it is seeded once and only read by the
//! trading flow. Nothing here is persisted.

use crate::error::{Result, TradingError};
use crate::model::instrument::Stock;
use crate::model::symbol::Symbol;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Seed listing as (symbol, price in cents).
const SEED: [(&str, i64); 10] = [
    ("AAPL", 15_000),
    ("GOOGL", 280_000),
    ("TSLA", 70_000),
    ("MSFT", 32_000),
    ("AMZN", 330_000),
    ("NFLX", 45_000),
    ("META", 28_000),
    ("DIS", 10_000),
    ("NVDA", 58_000),
    ("BA", 20_000),
];

/// A catalog of stocks keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stocks: HashMap<Symbol, Stock>,
}

impl Catalog {
    /// Creates a new, empty Catalog.
    pub fn new() -> Self {
        Self {
            stocks: HashMap::new(),
        }
    }

    /// Creates a Catalog holding the ten default listings.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (symbol, cents) in SEED {
            catalog.insert(Stock::listed(symbol, Decimal::new(cents, 2)));
        }
        catalog
    }

    /// Adds or replaces a stock, keyed by its symbol.
    pub fn insert(&mut self, stock: Stock) {
        self.stocks.insert(stock.symbol().clone(), stock);
    }

    /// Exact, case-sensitive lookup. Callers normalize user input first.
    pub fn lookup(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.get(symbol)
    }

    /// Whether `symbol` is listed (exact match).
    pub fn contains(&self, symbol: &str) -> bool {
        self.stocks.contains_key(symbol)
    }

    /// Every listed stock, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &Stock> {
        self.stocks.values()
    }

    /// Re-quotes a listed stock.
    pub fn set_price(&mut self, symbol: &str, price: Decimal) -> Result<()> {
        match self.stocks.get_mut(symbol) {
            Some(stock) => stock.set_price(price),
            None => Err(TradingError::UnknownSymbol(Symbol::new(symbol))),
        }
    }

    /// Number of listed stocks.
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// True when nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}
