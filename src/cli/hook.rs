use std::path::Path;

use crate::branch::GitBranch;
use crate::error::HookError;
use crate::update::{update_commit_message, Outcome};

/// Execute the hook against the real git checkout in the working directory.
///
/// Errors are returned to `main`, which renders them and exits non-zero so
/// git aborts the commit.
pub fn run(message_file: &Path) -> Result<Outcome, HookError> {
    tracing::debug!(path = %message_file.display(), "running commit message hook");
    update_commit_message(message_file, &GitBranch::new())
}
