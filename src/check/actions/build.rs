// Pre-build action analog: probe the system python and record the result,
// the way an execute_commands configure step would.
//
// `SYSTEM_PYTHON_VERSION` stays undefined when no python is found; the
// checker treats that as optional. `PRE_CONFIGURE_FAILED` is always
// defined and records whether the action itself succeeded.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=PATH");

    let probe = Command::new("python3")
        .arg("--version")
        .output()
        .or_else(|_| Command::new("python").arg("--version").output());

    match probe {
        Ok(output) if output.status.success() => {
            // python 2 reports its version on stderr
            let mut version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if version.is_empty() {
                version = String::from_utf8_lossy(&output.stderr).trim().to_string();
            }
            println!("cargo:rustc-env=SYSTEM_PYTHON_VERSION={version}");
            println!("cargo:rustc-env=PRE_CONFIGURE_FAILED=0");
        }
        _ => {
            println!("cargo:rustc-env=PRE_CONFIGURE_FAILED=1");
        }
    }
}
