// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! Startup verification of build-injected symbols.
//!
//! A checker holds a fixed, ordered table of [`Symbol`]s whose resolved
//! values were captured at compile time (`option_env!`, or constants from
//! a generated source file). [`verify`] walks the table once: a missing
//! mandatory symbol or a value mismatch is fatal and short-circuits, a
//! missing optional symbol is merely reported, and every verified symbol
//! produces one `<label>: <value>` line on the output stream.

use std::io::Write;

use thiserror::Error;

use crate::error::UError;

/// Whether the absence of a symbol is a fatal configuration error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Mandatory,
    Optional,
}

/// The value a defined symbol is expected to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    /// Presence is all that is asserted.
    Defined,
    /// Exact numeric equality of the parsed value.
    Int(i64),
    /// Exact byte equality.
    Str(&'static str),
}

/// One expected build-time symbol, together with the value the build
/// actually injected (if any).
#[derive(Clone, Copy, Debug)]
pub struct Symbol {
    /// Name of the injected symbol, used in diagnostics.
    pub name: &'static str,
    /// Display label for the success line (defaults to the name).
    pub label: &'static str,
    pub requirement: Requirement,
    pub expected: Expected,
    /// Value captured at compile time; `None` means undefined.
    pub resolved: Option<&'static str>,
}

impl Symbol {
    pub const fn mandatory(
        name: &'static str,
        expected: Expected,
        resolved: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label: name,
            requirement: Requirement::Mandatory,
            expected,
            resolved,
        }
    }

    pub const fn optional(
        name: &'static str,
        expected: Expected,
        resolved: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            label: name,
            requirement: Requirement::Optional,
            expected,
            resolved,
        }
    }

    /// Replace the display label used for the success line.
    pub const fn labeled(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }
}

/// A failed check. `Undefined` and the mismatch variants terminate the
/// process with exit code 2, standing in for the `abort()` of a native
/// configuration assert.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("{0} is not defined!")]
    Undefined(&'static str),
    #[error("assertion failed: {name} == {expected} (actual value: {actual})")]
    IntMismatch {
        name: &'static str,
        expected: i64,
        actual: String,
    },
    #[error("assertion failed: {name} == \"{expected}\" (actual value: \"{actual}\")")]
    StrMismatch {
        name: &'static str,
        expected: &'static str,
        actual: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl UError for SymbolError {
    fn code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            _ => 2,
        }
    }
}

/// Apply the check protocol to `table`, in order.
///
/// Success lines go to `out`, diagnostics for missing optional symbols go
/// to `err`. The diagnostic for a fatal failure is carried by the returned
/// [`SymbolError`] so the caller prints it exactly once on its way out.
pub fn verify(
    table: &[Symbol],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), SymbolError> {
    for symbol in table {
        let Some(value) = symbol.resolved else {
            match symbol.requirement {
                Requirement::Mandatory => return Err(SymbolError::Undefined(symbol.name)),
                Requirement::Optional => {
                    writeln!(err, "{} is not defined!", symbol.name)?;
                    continue;
                }
            }
        };

        match symbol.expected {
            Expected::Defined => {}
            Expected::Int(expected) => {
                // an unparsable value cannot equal the expected integer
                if value.trim().parse::<i64>().ok() != Some(expected) {
                    return Err(SymbolError::IntMismatch {
                        name: symbol.name,
                        expected,
                        actual: value.to_owned(),
                    });
                }
            }
            Expected::Str(expected) => {
                if value.as_bytes() != expected.as_bytes() {
                    return Err(SymbolError::StrMismatch {
                        name: symbol.name,
                        expected,
                        actual: value.to_owned(),
                    });
                }
            }
        }

        writeln!(out, "{}: {value}", symbol.label)?;
    }

    Ok(())
}
