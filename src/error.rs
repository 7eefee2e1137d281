use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors that abort the hook, and with it the commit.
///
/// A branch without an issue key or a message that is already tagged are not
/// errors; see [`crate::update::Outcome`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HookError {
    /// The git process could not be started at all.
    #[error("failed to run `{program} rev-parse --abbrev-ref HEAD`")]
    #[diagnostic(
        code(branch_issue_tag::branch_query_spawn),
        help("make sure git is installed and on PATH")
    )]
    BranchQuerySpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited with a failure status.
    #[error("branch query exited with {status}: {stderr}")]
    #[diagnostic(
        code(branch_issue_tag::branch_query_failed),
        help("the hook must run inside a git working tree")
    )]
    BranchQueryFailed { status: ExitStatus, stderr: String },

    #[error("commit message file not found: {}", .0.display())]
    #[diagnostic(code(branch_issue_tag::message_not_found))]
    MessageNotFound(PathBuf),

    #[error("failed to update commit message file {}", path.display())]
    #[diagnostic(code(branch_issue_tag::message_io))]
    MessageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    /// Classify an I/O error raised while touching the message file.
    pub(crate) fn message_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            HookError::MessageNotFound(path.to_path_buf())
        } else {
            HookError::MessageIo {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
