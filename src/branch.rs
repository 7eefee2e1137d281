use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::error::HookError;

/// Something that can tell which branch is checked out.
///
/// [`GitBranch`] asks git; tests plug in a closure returning a fixed name.
pub trait BranchSource {
    fn current_branch(&self) -> Result<String, HookError>;
}

impl<F> BranchSource for F
where
    F: Fn() -> Result<String, HookError>,
{
    fn current_branch(&self) -> Result<String, HookError> {
        self()
    }
}

/// Resolves the branch with `git rev-parse --abbrev-ref HEAD`.
#[derive(Debug, Clone)]
pub struct GitBranch {
    program: OsString,
    work_dir: Option<PathBuf>,
}

impl Default for GitBranch {
    fn default() -> Self {
        Self {
            program: OsString::from("git"),
            work_dir: None,
        }
    }
}

impl GitBranch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different git executable.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Run git in `dir` instead of the inherited working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }
}

impl BranchSource for GitBranch {
    fn current_branch(&self) -> Result<String, HookError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["rev-parse", "--abbrev-ref", "HEAD"]);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| HookError::BranchQuerySpawn {
            program: self.program.to_string_lossy().into_owned(),
            source,
        })?;

        if !output.status.success() {
            return Err(HookError::BranchQueryFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(branch = %branch, "resolved current branch");
        Ok(branch)
    }
}
