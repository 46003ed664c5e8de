// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::io;

use clap::{crate_version, Command};

use symcore::error::UResult;
use symcore::format_usage;
use symcore::symbols::{verify, Expected, Symbol};

// the header rendered by build.rs
include!(concat!(env!("OUT_DIR"), "/version.rs"));

const ABOUT: &str = "Verify the generated version header of the build configuration.";
const USAGE: &str = "{}";

// The tweak component is a tolerated gap in the configuration: report it,
// keep going.
static TABLE: &[Symbol] = &[
    Symbol::mandatory("MY_VERSION", Expected::Defined, MY_VERSION).labeled("version"),
    Symbol::mandatory("MY_VERSION_MAJOR", Expected::Defined, MY_VERSION_MAJOR).labeled("major"),
    Symbol::mandatory("MY_VERSION_MINOR", Expected::Defined, MY_VERSION_MINOR).labeled("minor"),
    Symbol::mandatory("MY_VERSION_PATCH", Expected::Defined, MY_VERSION_PATCH).labeled("patch"),
    Symbol::optional("MY_VERSION_TWEAK", Expected::Defined, MY_VERSION_TWEAK).labeled("tweak"),
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
