// spell-checker:ignore (vars) krate

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn main() {
    const ENV_FEATURE_PREFIX: &str = "CARGO_FEATURE_";

    let out_dir = env::var("OUT_DIR").unwrap();

    let mut crates = Vec::new();
    for (key, val) in env::vars() {
        if val == "1" && key.starts_with(ENV_FEATURE_PREFIX) {
            let krate = key[ENV_FEATURE_PREFIX.len()..].to_lowercase();
            if krate == "default" {
                continue;
            }
            crates.push(krate);
        }
    }
    crates.sort();

    let mut mf = File::create(Path::new(&out_dir).join("symcheck_map.rs")).unwrap();

    mf.write_all(
        "type UtilityMap<T> = HashMap<&'static str, fn(T) -> UResult<()>>;\n\
         \n\
         fn util_map<T: symcore::Args>() -> UtilityMap<T> {\n\
         \tlet mut map: UtilityMap<T> = HashMap::new();\n"
            .as_bytes(),
    )
    .unwrap();

    for krate in &crates {
        mf.write_all(
            format!("\tmap.insert(\"{krate}\", {krate}::uumain as fn(T) -> UResult<()>);\n")
                .as_bytes(),
        )
        .unwrap();
    }

    mf.write_all("\tmap\n}\n".as_bytes()).unwrap();
}
