// Shared test helpers for integration tests.
// Used by cli_test.rs and git_flows.rs.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_branch-issue-tag"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary in `cwd` with the given args.
/// Git is prevented from discovering repositories above `cwd`.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook_in(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    cmd.args(args).current_dir(cwd);
    if let Some(parent) = cwd.parent() {
        cmd.env("GIT_CEILING_DIRECTORIES", parent);
    }
    let output = cmd.output().expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Writes a commit message file into `dir` and returns its path.
pub fn write_message(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("COMMIT_EDITMSG");
    std::fs::write(&path, content).expect("failed to write commit message");
    path
}

pub fn read_message(path: &Path) -> String {
    std::fs::read_to_string(path).expect("failed to read commit message")
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=Hook Test",
            "-c",
            "user.email=hook@test.invalid",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        status.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&status.stderr)
    );
}

/// Creates a repository in `dir` with one empty commit, checked out on `branch`.
pub fn init_repo_on_branch(dir: &Path, branch: &str) {
    git(dir, &["init", "--quiet"]);
    git(dir, &["commit", "--quiet", "--allow-empty", "-m", "init"]);
    git(dir, &["checkout", "--quiet", "-b", branch]);
}
