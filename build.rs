use std::process::Command;

// Exposes BUILD_GIT_HASH, BUILD_DATE and BUILD_TARGET to the binaries' --version output.
fn main() {
    let hash = command_output("git", &["rev-parse", "--short", "HEAD"]);
    let dirty = command_output("git", &["status", "--porcelain"]).is_some_and(|s| !s.is_empty());
    let revision = match (hash, dirty) {
        (Some(hash), true) => format!("{hash}-dirty"),
        (Some(hash), false) => hash,
        (None, _) => "unknown".to_string(),
    };
    let date = command_output("date", &["+%Y-%m-%d"]).filter(|s| !s.is_empty());
    let target = std::env::var("TARGET").ok();

    println!("cargo:rustc-env=BUILD_GIT_HASH={revision}");
    println!("cargo:rustc-env=BUILD_DATE={}", date.as_deref().unwrap_or("unknown"));
    println!("cargo:rustc-env=BUILD_TARGET={}", target.as_deref().unwrap_or("unknown"));
    println!("cargo:rerun-if-changed=.git/HEAD");
}

/// Trimmed stdout of a successful command, `None` if it failed or is missing.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok().map(|s| s.trim().to_string())
}
