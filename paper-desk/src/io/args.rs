use crate::config::{DeskConfig, QuantityPolicy, DEFAULT_LOG_LEVEL};
use clap::Parser;

/// Paper-trading terminal over a fixed catalog of stocks.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Pass zero and negative trade sizes straight to the ledger instead
    /// of rejecting them
    #[arg(long)]
    pub permissive_quantities: bool,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Args {
    pub fn into_config(self) -> DeskConfig {
        let policy = if self.permissive_quantities {
            QuantityPolicy::Permissive
        } else {
            QuantityPolicy::Strict
        };
        DeskConfig::new(policy, self.log_level)
    }
}
