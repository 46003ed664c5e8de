// Generated-header analog: render `version.rs` into OUT_DIR from the
// crate version, the way a configure_file step renders `version.h`.
//
// The tweak component only exists when the build configuration supplies
// it, so a default build leaves `MY_VERSION_TWEAK` undefined.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-env-changed=SYMCHECK_VERSION_TWEAK");

    let out_dir = env::var("OUT_DIR").unwrap();
    let full = env::var("CARGO_PKG_VERSION").unwrap();
    let major = env::var("CARGO_PKG_VERSION_MAJOR").unwrap();
    let minor = env::var("CARGO_PKG_VERSION_MINOR").unwrap();
    let patch = env::var("CARGO_PKG_VERSION_PATCH").unwrap();
    let tweak = env::var("SYMCHECK_VERSION_TWEAK").ok();

    let mut header = String::new();
    for (name, value) in [
        ("MY_VERSION", Some(full)),
        ("MY_VERSION_MAJOR", Some(major)),
        ("MY_VERSION_MINOR", Some(minor)),
        ("MY_VERSION_PATCH", Some(patch)),
        ("MY_VERSION_TWEAK", tweak),
    ] {
        let resolved = match value {
            Some(value) => format!("Some(\"{value}\")"),
            None => "None".to_string(),
        };
        writeln!(header, "pub const {name}: Option<&str> = {resolved};").unwrap();
    }

    fs::write(Path::new(&out_dir).join("version.rs"), header).unwrap();
}
