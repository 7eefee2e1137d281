use std::path::Path;

use crate::branch::BranchSource;
use crate::error::HookError;
use crate::issue::{extract_issue, IssueId};
use crate::message::{rewrite_message_file, Rewrite};

/// How a single hook run ended. Every variant is a successful exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The branch name carries no issue key; the message file was not opened.
    NoIssue { branch: String },
    /// The key is already in the message.
    AlreadyTagged { issue: IssueId },
    /// The message now starts with `[KEY] `.
    Tagged { issue: IssueId },
}

/// Tag the commit message at `message_file` with the issue key of the
/// current branch.
///
/// Resolves the branch through `branches`, extracts the key and, when one
/// is found, rewrites the file unless it already mentions the key. Branch
/// lookup and file errors are returned unchanged; the caller is expected to
/// abort the commit.
///
/// # Examples
///
/// ```
/// use branch_issue_tag::update::{update_commit_message, Outcome};
/// use branch_issue_tag::HookError;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("COMMIT_EDITMSG");
/// std::fs::write(&path, "Fix login bug\n").unwrap();
///
/// let branch = || -> Result<String, HookError> { Ok("feature/PROJ-42-login".into()) };
/// let outcome = update_commit_message(&path, &branch).unwrap();
///
/// assert!(matches!(outcome, Outcome::Tagged { .. }));
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "[PROJ-42] Fix login bug\n");
/// ```
pub fn update_commit_message(
    message_file: &Path,
    branches: &impl BranchSource,
) -> Result<Outcome, HookError> {
    let branch = branches.current_branch()?;

    let Some(issue) = extract_issue(&branch) else {
        tracing::info!(branch = %branch, "no issue key in branch name, leaving message as is");
        return Ok(Outcome::NoIssue { branch });
    };
    tracing::debug!(%issue, branch = %branch, "found issue key");

    match rewrite_message_file(message_file, &issue)? {
        Rewrite::Tagged => {
            tracing::info!(%issue, path = %message_file.display(), "tagged commit message");
            Ok(Outcome::Tagged { issue })
        }
        Rewrite::AlreadyTagged => {
            tracing::info!(%issue, "commit message already mentions issue key");
            Ok(Outcome::AlreadyTagged { issue })
        }
    }
}
