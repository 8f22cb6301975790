//! Logging setup
//!
//! Logs never go to stdout, which carries command output.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr, or to `log_file` if given
///
/// `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8, log_file: Option<&Path>) {
    let log_level = level_for(verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pin_core={},pin={}", log_level, log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    // Ignore errors if already initialized
    match log_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let _ = builder.with_ansi(false).with_writer(file).try_init();
                debug!("Logging to {:?}", path);
            }
            Err(e) => {
                eprintln!("Warning: Could not open log file {:?}: {}", path, e);
                let _ = builder.with_writer(std::io::stderr).try_init();
            }
        },
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "debug");
        assert_eq!(level_for(2), "trace");
        assert_eq!(level_for(7), "trace");
    }
}
