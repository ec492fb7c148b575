#![allow(dead_code)]

use assert_cmd::Command;
use std::time::Duration;

pub struct TestContext {
    pub cmd: Command,
}

impl TestContext {
    /// A fresh command with the same isolated environment.
    pub fn new_cmd(&self) -> Command {
        new_command()
    }
}

fn new_command() -> Command {
    let bin_path = env!("CARGO_BIN_EXE_carton");
    let mut cmd = Command::new(bin_path);
    cmd.timeout(Duration::from_secs(30));
    // Keep the caller's environment from leaking into assertions.
    cmd.env_remove("CARTON_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn carton() -> TestContext {
    TestContext { cmd: new_command() }
}

/// Encodings printed one per line.
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}
