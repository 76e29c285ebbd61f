use std::process::Command;

fn git(args: &[&str]) -> Option<std::process::Output> {
    Command::new("git").args(args).output().ok()
}

fn short_rev() -> String {
    let rev = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(o) if o.status.success() => String::from_utf8_lossy(&o.stdout).trim().to_string(),
        _ => return "unknown".to_string(),
    };

    let dirty = git(&["diff", "--quiet"])
        .map(|o| !o.status.success())
        .unwrap_or(false);

    if dirty { format!("{}-dirty", rev) } else { rev }
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", short_rev());
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
