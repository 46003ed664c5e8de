// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
// spell-checker:ignore (libs) checklib

use std::io;

use clap::{crate_version, Command};

use symcore::error::{UResult, USimpleError};
use symcore::format_usage;
use symcore::symbols::{verify, Expected, Symbol};

const ABOUT: &str =
    "Verify the library-scoped symbol set, then exercise the linked checklib entry point.";
const USAGE: &str = "{}";

static TABLE: &[Symbol] = &[
    Symbol::mandatory(
        "DEFINE_WITHOUT_VALUE",
        Expected::Defined,
        option_env!("DEFINE_WITHOUT_VALUE"),
    ),
    Symbol::mandatory(
        "DEFINE_WITH_INT_VALUE",
        Expected::Int(64),
        option_env!("DEFINE_WITH_INT_VALUE"),
    ),
    Symbol::mandatory(
        "DEFINE_WITH_STRING_VALUE",
        Expected::Str("hello"),
        option_env!("DEFINE_WITH_STRING_VALUE"),
    ),
    Symbol::mandatory(
        "DEFINE_WITH_STRING_NUMBER_VALUE",
        Expected::Str("420"),
        option_env!("DEFINE_WITH_STRING_NUMBER_VALUE"),
    ),
];

pub fn uumain(args: impl symcore::Args) -> UResult<()> {
    uu_app().get_matches_from(args);

    {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        verify(TABLE, &mut out, &mut err)?;
    }

    // the locks are released before the library writes its own markers
    match checklib::run() {
        0 => Ok(()),
        status => Err(USimpleError::new(
            status,
            format!("library call failed with status {status}"),
        )),
    }
}

pub fn uu_app() -> Command {
    Command::new(symcore::util_name())
        .version(crate_version!())
        .about(ABOUT)
        .override_usage(format_usage(USAGE))
        .infer_long_args(true)
}
