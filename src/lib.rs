pub mod branch;
pub mod error;
pub mod issue;
pub mod message;
pub mod update;

pub(crate) mod cli;

use std::path::Path;

pub use error::HookError;

/// Run the hook on `message_file` with logging at the given verbosity.
///
/// Installs stderr logging, then tags the message using the git checkout in
/// the current directory. `main.rs` calls this; code that wants its own
/// branch lookup or logging can call [`update::update_commit_message`].
pub fn run_hook(
    message_file: &Path,
    verbose: u8,
    quiet: bool,
) -> Result<update::Outcome, HookError> {
    cli::init_tracing(cli::log_level(verbose, quiet));
    cli::hook::run(message_file)
}
