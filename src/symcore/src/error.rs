// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! All checkers exit with an exit code. The following scheme is used:
//! * `0`: every mandatory check passed
//! * `1`: minor problems (e.g. reporting failed)
//! * `2`: major problems (a mandatory symbol missing or mismatched)
//!
//! This module reconciles these exit codes with idiomatic Rust error
//! handling: a checker's `uumain` returns [`UResult`], errors carry their
//! exit code through [`UError::code`], and `Ok(())` is exit 0 — a missing
//! optional symbol is reported without touching the terminal state.

use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Result type returned by every checker's `uumain`.
pub type UResult<T> = Result<T, Box<dyn UError>>;

/// Custom errors defined by the checkers and `symcore`.
///
/// Implementors specify the process exit code used when the error
/// propagates out of `uumain`; the `Display` impl provides the diagnostic
/// printed to stderr.
pub trait UError: Error + Send {
    /// Exit code reported to the shell when this error terminates the
    /// process.
    fn code(&self) -> i32 {
        1
    }
}

impl<T> From<T> for Box<dyn UError>
where
    T: UError + 'static,
{
    fn from(t: T) -> Self {
        Box::new(t)
    }
}

/// A simple error type with an exit code and a message that implements [`UError`].
///
/// ```
/// use symcore::error::{UResult, USimpleError};
/// let res: UResult<()> = Err(USimpleError::new(1, "error!"));
/// ```
#[derive(Debug)]
pub struct USimpleError {
    /// Exit code of the error.
    pub code: i32,

    /// Error message.
    pub message: String,
}

impl USimpleError {
    /// Create a new `USimpleError` with a given exit code and message.
    #[allow(clippy::new_ret_no_self)]
    pub fn new<S: Into<String>>(code: i32, message: S) -> Box<dyn UError> {
        Box::new(Self {
            code,
            message: message.into(),
        })
    }
}

impl Error for USimpleError {}

impl Display for USimpleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.message.fmt(f)
    }
}

impl UError for USimpleError {
    fn code(&self) -> i32 {
        self.code
    }
}
