// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! Shared plumbing for the symcheck checkers: argument handling, utility
//! naming, error types and the symbol verification protocol itself.

pub mod error;
pub mod panic;
pub mod symbols;

use std::ffi::OsString;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

use crate::error::{UError, UResult};

/// Whether we were called as a multicall binary (`symcheck <checker>`)
pub static UTILITY_IS_SECOND_ARG: AtomicBool = AtomicBool::new(false);

/// Used to check if we were called as a multicall binary (`symcheck <checker>`)
pub fn get_utility_is_second_arg() -> bool {
    UTILITY_IS_SECOND_ARG.load(Ordering::SeqCst)
}

/// Specify that the checker name is the second argument, not `argv[0]`.
pub fn set_utility_is_second_arg() {
    UTILITY_IS_SECOND_ARG.store(true, Ordering::SeqCst);
}

// args_os() can be expensive to call, it copies all of argv before iterating.
// So if we want only the first arg or so it's overkill. We cache it.
static ARGV: Lazy<Vec<OsString>> = Lazy::new(|| std::env::args_os().collect());

static UTIL_NAME: Lazy<String> = Lazy::new(|| {
    if get_utility_is_second_arg() {
        ARGV[1].to_string_lossy().into_owned()
    } else {
        Path::new(&ARGV[0])
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| ARGV[0].to_string_lossy().into_owned())
    }
});

/// Derive the checker name from the invocation.
pub fn util_name() -> &'static str {
    &UTIL_NAME
}

static EXECUTION_PHRASE: Lazy<String> = Lazy::new(|| {
    if get_utility_is_second_arg() {
        ARGV.iter()
            .take(2)
            .map(|os_str| os_str.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        ARGV[0].to_string_lossy().into_owned()
    }
});

/// Full invocation phrase, e.g. `symcheck defines` or `defines`.
pub fn execution_phrase() -> &'static str {
    &EXECUTION_PHRASE
}

/// Argument iterator accepted by every checker's `uumain`.
pub trait Args: Iterator<Item = OsString> + Sized {}

impl<T: Iterator<Item = OsString> + Sized> Args for T {}

/// Returns an iterator over the command line arguments of the process.
pub fn args_os() -> impl Iterator<Item = OsString> {
    ARGV.iter().cloned()
}

/// Generate the usage string for clap.
///
/// Indents all but the first line so the lines align below clap's
/// "Usage: " prefix and replaces all occurrences of `{}` with the
/// execution phrase.
pub fn format_usage(s: &str) -> String {
    let s = s.replace('\n', &format!("\n{}", " ".repeat(7)));
    s.replace("{}", execution_phrase())
}

/// Run a checker's `uumain` and reconcile its result with the process
/// exit code scheme.
///
/// On `Ok`, 0 is used. On `Err`, the error message is printed to stderr
/// as-is and the code reported by [`error::UError::code`] is used.
pub fn run<T: Args>(uumain: impl FnOnce(T) -> UResult<()>, args: T) -> i32 {
    match uumain(args) {
        Ok(()) => 0,
        Err(e) => {
            let s = format!("{e}");
            if !s.is_empty() {
                eprintln!("{s}");
            }
            e.code()
        }
    }
}

/// Execute utility code for `util`.
///
/// This macro expands to a main function that invokes the `uumain`
/// function in `util` and exits with the resulting code.
#[macro_export]
macro_rules! bin {
    ($util:ident) => {
        pub fn main() {
            use std::io::Write;
            // suppress extraneous error output for SIGPIPE failures/panics
            $crate::panic::mute_sigpipe_panic();
            let code = $crate::run($util::uumain, $crate::args_os());
            // (defensively) flush stdout for utility prior to exit; see <https://github.com/rust-lang/rust/issues/23818>
            if let Err(e) = std::io::stdout().flush() {
                eprintln!("Error flushing stdout: {e}");
            }

            std::process::exit(code);
        }
    };
}
