use crate::model::symbol::Symbol;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the catalog and the holdings ledger.
///
/// The messages of the user-facing variants are printed verbatim by the
/// terminal, so they read as complete sentences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradingError {
    /// The symbol is not listed in the catalog.
    #[error("Stock symbol not found.")]
    UnknownSymbol(Symbol),

    /// A sell was requested for a symbol the ledger does not hold.
    #[error("Stock not found in portfolio.")]
    NotHeld(Symbol),

    /// A sell asked for more shares than are held.
    #[error("Insufficient quantity to sell.")]
    InsufficientQuantity {
        symbol: Symbol,
        held: i64,
        requested: i64,
    },

    /// The trade would push the holding past the representable share count.
    #[error("Quantity too large for the current holding.")]
    QuantityOverflow {
        symbol: Symbol,
        held: i64,
        requested: i64,
    },

    /// Trade quantities must be strictly positive.
    #[error("Quantity must be a positive integer, got {0}.")]
    InvalidQuantity(i64),

    #[error("Price must not be negative, got {0}.")]
    NegativePrice(Decimal),
}

/// A specialized Result type for catalog and ledger operations.
pub type Result<T> = std::result::Result<T, TradingError>;
