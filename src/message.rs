use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::HookError;
use crate::issue::IssueId;

/// What [`rewrite_message_file`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// The tag was prepended.
    Tagged,
    /// The key already appears somewhere in the message; file left as is.
    AlreadyTagged,
}

/// The literal prefix written in front of a message: `[PROJ-42] `.
pub fn tag_for(issue: &IssueId) -> String {
    format!("[{issue}] ")
}

/// Prepend the issue tag to `message`.
///
/// Returns `None` when the key is already contained anywhere in the message,
/// tagged or not, so running the hook twice never stacks tags.
pub fn prepend_tag(message: &str, issue: &IssueId) -> Option<String> {
    if message.contains(issue.as_str()) {
        return None;
    }
    Some(format!("{}{message}", tag_for(issue)))
}

/// Rewrite the commit message file at `path` in place.
///
/// The whole file is read before anything is written. The file is truncated
/// before the new content goes in, so the result is exactly
/// `tag + original` regardless of byte lengths.
pub fn rewrite_message_file(path: &Path, issue: &IssueId) -> Result<Rewrite, HookError> {
    let io_err = |e| HookError::message_io(path, e);

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(io_err)?;

    let mut message = String::new();
    file.read_to_string(&mut message).map_err(io_err)?;

    let Some(updated) = prepend_tag(&message, issue) else {
        return Ok(Rewrite::AlreadyTagged);
    };

    file.seek(SeekFrom::Start(0)).map_err(io_err)?;
    file.set_len(0).map_err(io_err)?;
    file.write_all(updated.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    Ok(Rewrite::Tagged)
}
