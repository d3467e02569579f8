//! Shared integration-test harness for spawning the `pageweave` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for invoking the compiled `pageweave` binary.
pub struct PageweaveCli;

impl PageweaveCli {
    /// Runs the binary with the given arguments and waits for exit.
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn spawn_command(args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_pageweave");
        Command::new(bin)
            .args(args)
            .output()
            .expect("failed to spawn pageweave")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}
