//! Emitting diagnostics through the `log` facade
//!
//! The library never installs a logger itself. Binaries call
//! [`DiagnosticLogger::init`] once at startup (or install any other `log`
//! implementation); tests call [`DiagnosticLogger::init_test`].

use crate::diagnostic::Diagnostic;
use log::{Level, debug, error, log};
use std::sync::Once;

/// Log target used for every record emitted by this crate
pub const LOG_TARGET: &str = "diagnostics";

static INIT_LOGGER: Once = Once::new();

/// `env_logger` setup and structured emission of diagnostics
pub struct DiagnosticLogger;

impl DiagnosticLogger {
    /// Initialize `env_logger` from `RUST_LOG`, at most once per process
    ///
    /// - `RUST_LOG=diagnostics=debug` - also show diagnostics logged at debug
    /// - `RUST_LOG=error` - only failures logged with [`Self::log_failure`]
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            debug!(target: LOG_TARGET, "diagnostic logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; a logger already installed wins.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed operation with the full tree of its diagnostic
    ///
    /// Nothing is logged when `diagnostic` is not a failure.
    pub fn log_failure(operation: &str, diagnostic: &Diagnostic) {
        if diagnostic.is_err() {
            error!(
                target: LOG_TARGET,
                "{operation} failed: {}",
                diagnostic.user_facing()
            );
        }
    }
}

impl Diagnostic {
    /// Emit the tree rendering at `level`, skipping the absent failure
    pub fn log(&self, level: Level) {
        if self.is_err() {
            log!(target: LOG_TARGET, level, "{}", self.user_facing());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_operations() {
        DiagnosticLogger::init_test();
        DiagnosticLogger::init_test();

        let failure = Diagnostic::from_message("disk full")
            .with_data("free_bytes", 0u64)
            .wrap("saving snapshot");

        // These should not panic whether or not a logger was installed first
        failure.log(Level::Warn);
        Diagnostic::none().log(Level::Error);
        DiagnosticLogger::log_failure("snapshot", &failure);
        DiagnosticLogger::log_failure("snapshot", &Diagnostic::none());
    }
}
