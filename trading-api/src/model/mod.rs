pub mod catalog;
pub mod holdings;
pub mod instrument;
pub mod quantity;
pub mod symbol;

pub use catalog::*;
pub use holdings::*;
pub use instrument::*;
pub use quantity::*;
pub use symbol::*;
