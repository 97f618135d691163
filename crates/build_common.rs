// Shared build script utilities for README-to-rustdoc transformation.
// Include this in build.rs files with: include!("../build_common.rs");
//
// Required imports in the including file:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Copy a crate's README.md into `OUT_DIR` so it can be used as crate docs.
///
/// Links of the form `](src/foo.rs)` are rewritten to `](foo)` so rustdoc
/// resolves them as modules. Links back to the workspace README are turned
/// into absolute repository URLs taken from the workspace `Cargo.toml`.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("README_GENERATED.md");

    let readme_path = Path::new(crate_dir).join("README.md");
    let Ok(content) = fs::read_to_string(&readme_path) else {
        // Keep `include_str!` happy even without a README
        fs::write(dest_path, "").unwrap();
        return;
    };

    let mut rustdoc_content = content.replace("](src/", "](").replace(".rs)", ")");

    if let Some(url) = workspace_repo_url(crate_dir) {
        rustdoc_content = rustdoc_content.replace("](../../README.md", &format!("]({url}"));
    }

    fs::write(dest_path, rustdoc_content).unwrap();
}

/// Extract `repository = "..."` from the workspace Cargo.toml.
fn workspace_repo_url(crate_dir: &str) -> Option<String> {
    let workspace_toml = Path::new(crate_dir)
        .parent()? // crates/
        .parent()? // workspace root
        .join("Cargo.toml");

    let content = fs::read_to_string(workspace_toml).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        if !line.starts_with("repository") || !line.contains('=') {
            return None;
        }
        let start = line.find('"')?;
        let end = line.rfind('"')?;
        (start < end).then(|| line[start + 1..end].to_string())
    })
}
