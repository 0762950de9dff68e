//! Logger setup for the command-line binary.

use log::LevelFilter;

/// Maps the `-v` count to a log level.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` writing to stderr, keeping stdout for command output.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
