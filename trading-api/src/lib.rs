pub mod error;
pub mod model;

pub use error::{Result, TradingError};
pub use model::catalog::Catalog;
pub use model::holdings::Holdings;
pub use model::instrument::Stock;
pub use model::quantity::Quantity;
pub use model::symbol::Symbol;

