//! Error types for rex-console
//!
//! Provides the crate error type, including the termination-request value
//! produced by [`Console::abort`](crate::Console::abort). An abort is not a
//! process exit by itself: it travels up the call stack as an ordinary
//! `Err`, so any caller may intercept it to clean up or recover. Only the
//! host's top-level entry point turns an uncaught error into
//! `std::process::exit(err.exit_code())`.

use thiserror::Error;

/// Result type alias for rex-console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for rex-console operations
#[derive(Error, Debug)]
pub enum Error {
    /// Execution abort requested; the process should exit once this
    /// propagates uncaught
    #[error("Fatal error: {0}")]
    Aborted(String),

    /// A seconds value outside the formatter's domain (negative or not
    /// finite)
    #[error("Invalid seconds value: {0}")]
    InvalidSeconds(f64),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::Aborted(_) => 1,       // GeneralError
            Error::InvalidSeconds(_) => 2, // UsageError
        }
    }

    /// Whether this error is a termination request from `abort`
    pub const fn is_abort(&self) -> bool {
        matches!(self, Error::Aborted(_))
    }
}
