use std::env;
use std::fs;
use std::path::Path;

include!("../build_common.rs");

/// Build-time variables naming the compiled-in data locations.
///
/// Packagers set these when building, e.g.
/// `FINDFILE_PREFIX=/usr cargo build --release`.
const INSTALL_VARS: [&str; 2] = ["FINDFILE_INST_DATA", "FINDFILE_PREFIX"];

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    process_readme_for_rustdoc(&crate_dir);

    // Forward install locations so `option_env!` sees them in the crate
    for var in INSTALL_VARS {
        println!("cargo:rerun-if-env-changed={var}");
        if let Ok(value) = env::var(var) {
            if !value.trim().is_empty() {
                println!("cargo:rustc-env={var}={value}");
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
