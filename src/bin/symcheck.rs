// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::cmp;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use symcore::error::UResult;

const VERSION: &str = env!("CARGO_PKG_VERSION");

include!(concat!(env!("OUT_DIR"), "/symcheck_map.rs"));

fn usage<T>(utils: &UtilityMap<T>, name: &str) {
    println!("{name} {VERSION} (multi-call binary)\n");
    println!("Usage: {name} [function [arguments...]]");
    println!("       {name} --list");
    println!();
    println!("Options:");
    println!("      --list    lists all defined functions, one per row\n");
    println!("Currently defined functions:\n");
    let mut utils: Vec<&str> = utils.keys().copied().collect();
    utils.sort_unstable();
    let display_list = utils.join(", ");
    let width = list_width(textwrap::termwidth());
    println!(
        "{}",
        textwrap::indent(&textwrap::fill(&display_list, width), "    ")
    );
}

// (opinion/heuristic) max 100 chars wide with 4 character side indentions,
// never narrower than 20 even on a tiny terminal
fn list_width(terminal_width: usize) -> usize {
    cmp::min(terminal_width, 100).saturating_sub(4 * 2).max(20)
}

/// # Panics
/// Panics if the binary path cannot be determined
fn binary_path(args: &mut impl Iterator<Item = OsString>) -> PathBuf {
    match args.next() {
        Some(ref s) if !s.is_empty() => PathBuf::from(s),
        _ => std::env::current_exe().unwrap(),
    }
}

fn name(binary_path: &Path) -> Option<&str> {
    binary_path.file_stem()?.to_str()
}

fn main() {
    symcore::panic::mute_sigpipe_panic();

    let utils = util_map();
    let mut args = symcore::args_os();

    let binary = binary_path(&mut args);
    let binary_as_util = name(&binary).unwrap_or_else(|| {
        usage(&utils, "<unknown binary name>");
        process::exit(0);
    });

    // binary name equals checker name?
    if let Some(&uumain) = utils.get(binary_as_util) {
        process::exit(symcore::run(
            uumain,
            vec![binary.into()].into_iter().chain(args),
        ));
    }

    // binary name equals prefixed checker name?
    // * prefix/stem may be any string ending in a non-alphanumeric character
    let util_name = if let Some(util) = utils.keys().find(|util| {
        binary_as_util.ends_with(*util)
            && !binary_as_util[..binary_as_util.len() - (*util).len()]
                .ends_with(char::is_alphanumeric)
    }) {
        // prefixed checker => replace 0th (aka, executable name) argument
        Some(OsString::from(*util))
    } else {
        // unmatched binary name => regard as multi-binary container and advance argument list
        symcore::set_utility_is_second_arg();
        args.next()
    };

    // 0th argument equals checker name?
    if let Some(util_os) = util_name {
        fn not_found(util: &OsStr) -> ! {
            println!("{}: function/utility not found", util.to_string_lossy());
            process::exit(1);
        }

        let Some(util) = util_os.to_str() else {
            not_found(&util_os)
        };

        if util == "--list" {
            let mut utils: Vec<_> = utils.keys().collect();
            utils.sort();
            for util in utils {
                println!("{util}");
            }
            process::exit(0);
        }

        match utils.get(util) {
            Some(&uumain) => {
                process::exit(symcore::run(
                    uumain,
                    vec![util_os].into_iter().chain(args),
                ));
            }
            None => {
                if util == "--help" || util == "-h" {
                    // see if they want help on a specific checker
                    if let Some(util_os) = args.next() {
                        let Some(util) = util_os.to_str() else {
                            not_found(&util_os)
                        };

                        match utils.get(util) {
                            Some(&uumain) => {
                                let code = symcore::run(
                                    uumain,
                                    vec![util_os, OsString::from("--help")]
                                        .into_iter()
                                        .chain(args),
                                );
                                io::stdout().flush().expect("could not flush stdout");
                                process::exit(code);
                            }
                            None => not_found(&util_os),
                        }
                    }
                    usage(&utils, binary_as_util);
                    process::exit(0);
                } else if util == "--version" || util == "-V" {
                    println!("{binary_as_util} {VERSION} (multi-call binary)");
                    process::exit(0);
                } else {
                    not_found(&util_os);
                }
            }
        }
    } else {
        // no arguments provided
        usage(&utils, binary_as_util);
        process::exit(0);
    }
}
