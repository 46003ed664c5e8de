// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::io;

use clap::{crate_version, Command};

use symcore::error::UResult;
use symcore::format_usage;
use symcore::symbols::{verify, Expected, Symbol};

const ABOUT: &str = "Verify symbols produced by the pre-build actions of the build configuration.";
const USAGE: &str = "{}";

static TABLE: &[Symbol] = &[
    // absent whenever the build machine has no python; tolerated
    Symbol::optional(
        "SYSTEM_PYTHON_VERSION",
        Expected::Defined,
        option_env!("SYSTEM_PYTHON_VERSION"),
    ),
    Symbol::mandatory(
        "PRE_CONFIGURE_FAILED",
        Expected::Defined,
        option_env!("PRE_CONFIGURE_FAILED"),
    ),
];

pub fn uumain(args: impl symcore::Args) -> UResult<()> {
    uu_app().get_matches_from(args);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    verify(TABLE, &mut out, &mut err)?;
    Ok(())
}

pub fn uu_app() -> Command {
    Command::new(symcore::util_name())
        .version(crate_version!())
        .about(ABOUT)
        .override_usage(format_usage(USAGE))
        .infer_long_args(true)
}
