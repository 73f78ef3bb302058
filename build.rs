use std::env;
use std::process::Command;

/// Embeds build provenance into the binary so `version` can report where a
/// demo transcript came from. Every value degrades to "unknown" outside a
/// git checkout or a full toolchain.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    emit("HASH", command_stdout("git", &["rev-parse", "--short", "HEAD"]));
    emit("STATUS", worktree_state());
    emit(
        "TIMESTAMP",
        Some(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
    );
    emit("TARGET", env::var("TARGET").ok());
    emit("PROFILE", env::var("PROFILE").ok());
    emit("RUSTC", command_stdout("rustc", &["--version"]));
}

fn emit(key: &str, value: Option<String>) {
    let value = value.unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SHOTENGAI_CORE_BUILD_{key}={value}");
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn worktree_state() -> Option<String> {
    let output = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let state = if output.stdout.iter().all(u8::is_ascii_whitespace) {
        "clean"
    } else {
        "dirty"
    };
    Some(state.to_string())
}
