pub mod config;
pub mod desk;
pub mod error;
pub mod io;
pub mod session;

pub use config::{DeskConfig, QuantityPolicy};
pub use desk::{Desk, MenuChoice};
pub use error::{DeskError, Result};
pub use session::{Fill, Session};
