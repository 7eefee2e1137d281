pub mod hook;

use tracing::Level;

/// Map `-v`/`-q` counts to a log level. Warnings show by default.
pub(crate) fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a plain stderr subscriber. Stdout stays untouched since git
/// shows hook output to the user.
pub(crate) fn init_tracing(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be installed when the library is embedded.
    tracing::subscriber::set_global_default(subscriber).ok();
}
