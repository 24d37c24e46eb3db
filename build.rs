//! Build script: embeds the version from `WINMKLINK_VERSION` or `git describe`.
use std::process::Command;

fn main() {
    // WINMKLINK_VERSION from the environment wins (release builds); local
    // builds fall back to git describe.
    if let Ok(version) = std::env::var("WINMKLINK_VERSION") {
        println!("cargo:rustc-env=WINMKLINK_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=WINMKLINK_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=WINMKLINK_VERSION");
}
