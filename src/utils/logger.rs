use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error, for commands that do not take over the terminal
    Stderr,
    /// Append to a file, so the TUI screen stays clean
    File(&'a Path),
}

fn build_filter(verbose: bool) -> EnvFilter {
    // RUST_LOG wins; otherwise info, or debug with --verbose
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    })
}

/// Initialize the logging system
pub fn init_logger(target: LogTarget<'_>, verbose: bool) -> Result<()> {
    let filter = build_filter(verbose);

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .compact(),
            )
            .try_init()?,
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false)
                        .compact(),
                )
                .try_init()?
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_target_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashdeck.log");

        // Another test may already own the global subscriber; the file must
        // still be opened before that is reported.
        let _ = init_logger(LogTarget::File(&path), true);

        assert!(path.exists());
    }

    #[test]
    fn test_missing_log_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("flashdeck.log");
        assert!(init_logger(LogTarget::File(&path), false).is_err());
    }
}
