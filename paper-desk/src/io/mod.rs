pub mod args;
pub mod console;
pub mod mock;

pub use args::Args;
pub use console::{Console, StreamConsole};
