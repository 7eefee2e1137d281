use clap::Parser;
use std::path::PathBuf;

/// Prefix commit messages with the issue key found in the branch name.
///
/// Install as a `commit-msg` git hook. As `prepare-commit-msg` only `-m`/`-F`
/// commits get tagged, since the editor template names the branch.
#[derive(Debug, Parser)]
#[command(name = "branch-issue-tag", version, about)]
struct Cli {
    /// Path to the commit message file git passes to the hook
    message_file: PathBuf,

    /// Extra hook arguments (commit source, sha); ignored
    #[arg(hide = true, value_name = "HOOK_ARGS")]
    _hook_args: Vec<String>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    branch_issue_tag::run_hook(&cli.message_file, cli.verbose, cli.quiet)?;
    Ok(())
}
