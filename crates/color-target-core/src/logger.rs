//! Minimal logger.
//!
//! Prints `[elapsed LEVEL] message` to stderr. Install once at startup
//! with `init_with_level`; later calls are no-ops.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

struct ElapsedLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for ElapsedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        let _ = writeln!(
            std::io::stderr(),
            "[{:7.3}s {:>5}] {}",
            elapsed,
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<ElapsedLogger> = OnceLock::new();

/// Install the elapsed-time logger with the provided level filter.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| ElapsedLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_error_is_a_std_error() {
        // keeps `?` working in `fn main() -> Result<(), Box<dyn Error>>`
        fn assert_error<E: std::error::Error>() {}
        assert_error::<log::SetLoggerError>();
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init_with_level(LevelFilter::Debug).expect("first install");
        init_with_level(LevelFilter::Info).expect("second install is a no-op");
        log::debug!("logger smoke test");
    }
}
