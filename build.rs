//! Build script stamping the footer's version and commit.
//!
//! - PORTFOLIO_VERSION: explicit version, else the latest `v*` git tag, else
//!   CARGO_PKG_VERSION
//! - PORTFOLIO_GIT_SHA: explicit commit, else `git rev-parse --short HEAD`,
//!   else "unknown"

use std::process::Command;

fn main() {
    let version = std::env::var("PORTFOLIO_VERSION")
        .ok()
        .or_else(|| git(&["describe", "--tags", "--abbrev=0", "--match", "v*"]))
        .map(|v| v.trim_start_matches('v').to_string())
        .or_else(|| std::env::var("CARGO_PKG_VERSION").ok())
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=PORTFOLIO_VERSION={}", version);

    let git_sha = std::env::var("PORTFOLIO_GIT_SHA")
        .ok()
        .or_else(|| git(&["rev-parse", "--short", "HEAD"]))
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=PORTFOLIO_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_VERSION");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_GIT_SHA");
    println!("cargo:rerun-if-changed=.git/HEAD");
}

/// Trimmed stdout of a successful, non-empty git command.
fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
