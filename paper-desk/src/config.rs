/// `env_logger` filter used when neither RUST_LOG nor `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// How trade sizes typed at the terminal are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityPolicy {
    /// Only strictly positive quantities are traded.
    Strict,
    /// Any integer goes straight to the ledger arithmetic, zero and
    /// negative sizes included.
    Permissive,
}

/// Configuration for a trading session.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    quantity_policy: QuantityPolicy,
    /// Default `env_logger` filter, used when RUST_LOG is not set.
    log_level: String,
}

impl DeskConfig {
    pub fn new(quantity_policy: QuantityPolicy, log_level: impl Into<String>) -> Self {
        Self {
            quantity_policy,
            log_level: log_level.into(),
        }
    }

    pub fn quantity_policy(&self) -> QuantityPolicy {
        self.quantity_policy
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}
