//! Generates `build_info.rs` in OUT_DIR for `chronicles --version`.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// Short hash of HEAD, if this is a git checkout with git on PATH.
fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

/// Env override first, then the fallback.
fn setting(var: &str, fallback: impl FnOnce() -> Option<String>) -> String {
    println!("cargo:rerun-if-env-changed={}", var);
    env::var(var)
        .ok()
        .or_else(fallback)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    let commit = setting("BUILD_COMMIT", git_commit);
    let date = setting("BUILD_DATE", || {
        Some(chrono::Utc::now().format("%Y-%m-%d").to_string())
    });
    let profile = env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string());

    let generated = [
        ("BUILD_COMMIT", commit),
        ("BUILD_DATE", date),
        ("BUILD_PROFILE", profile),
    ]
    .iter()
    .map(|(name, value)| format!("pub const {}: &str = {:?};\n", name, value))
    .collect::<String>();

    let dest = PathBuf::from(env::var("OUT_DIR")?).join("build_info.rs");
    fs::write(dest, generated)?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}
