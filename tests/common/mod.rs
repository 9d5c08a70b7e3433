//! Shared testing utilities for syncgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CLIENT_CONFIG: &str = r#"[config]
type = "client"
classname = "FooPlugin"
name = "foo"
destinationtype = "online"
schedule = "daily"
displayname = "Foo Sync"
transport = "ip"
enabled = true
syncdirection = "two-way"
conflictpolicy = "prefer remote"

[config.agent]
name = "foo-agent"

[config.agent.props]
"Sync Protocol" = "SyncML12"

[config.storages.hcontacts]
enabled = true
"Local URI" = "./contacts"

[config.ext-config]
remote_id = "abc"
"#;

pub const SERVER_CONFIG: &str = r#"[config]
type = "server"
classname = "FooServer"
name = "fooserver"
transport = "usb"
enabled = true

[config.storages.hcalendar]
enabled = true
"#;

pub const STORAGE_CONFIG: &str = r#"[config]
type = "storage"
classname = "FooStorage"
name = "hfoo"
mimetype = "text/x-vcard"
enabled = true
"#;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `syncgen` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("syncgen").expect("Failed to locate syncgen binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Build a generate invocation for `config` into `outdir`.
    pub fn generate(&self, config: &str, outdir: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["--config", config, "--outdir", outdir]);
        cmd
    }

    /// Write a plugin description into the work directory.
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Path below the work directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir().join(relative)
    }

    /// Read a generated file.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// All files under `relative`, as sorted paths relative to it.
    pub fn tree(&self, relative: &str) -> Vec<String> {
        let base = self.path(relative);
        let mut files = Vec::new();
        collect(&base, &base, &mut files);
        files.sort();
        files
    }

    /// Assert that a path exists.
    pub fn assert_exists(&self, relative: &str) {
        assert!(self.path(relative).exists(), "{} should exist", relative);
    }

    /// Assert that a path does not exist.
    pub fn assert_not_exists(&self, relative: &str) {
        assert!(!self.path(relative).exists(), "{} should not exist", relative);
    }
}

fn collect(base: &Path, dir: &Path, files: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect(base, &path, files);
        } else {
            let relative = path.strip_prefix(base).expect("path below base");
            files.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}
