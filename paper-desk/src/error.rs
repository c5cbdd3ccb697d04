use thiserror::Error;

/// Errors that end the trading loop.
///
/// Refused trades are not among them: the desk reports those to the user
/// and keeps going.
#[derive(Error, Debug)]
pub enum DeskError {
    /// Reading from or writing to the console failed.
    #[error("Console IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the user chose to exit.
    #[error("Input closed before exit was requested")]
    InputClosed,
}

/// A specialized Result type for desk operations.
pub type Result<T> = std::result::Result<T, DeskError>;
