use crate::ConsoleError;
use crate::early_trace;
use core::fmt;
use kernel_sync::SyncOnceCell;
use log::{LevelFilter, Log, Metadata, Record};

pub struct EarlyConLogger {
    max_level: LevelFilter,
}

static LOGGER: SyncOnceCell<EarlyConLogger> = SyncOnceCell::new();

impl EarlyConLogger {
    #[must_use]
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    /// Call this once during early init, after [`register_console`](crate::register_console).
    ///
    /// # Errors
    /// [`ConsoleError::LoggerAlreadySet`] if this or any other logger was
    /// installed before.
    pub fn init(self) -> Result<(), ConsoleError> {
        let max_level = self.max_level;
        LOGGER
            .set(self)
            .map_err(|_| ConsoleError::LoggerAlreadySet)?;
        let logger: &'static Self = LOGGER.get().ok_or(ConsoleError::LoggerAlreadySet)?;
        log::set_logger(logger).map_err(|_| ConsoleError::LoggerAlreadySet)?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Format a record the way it appears on the console.
    ///
    /// # Errors
    /// Propagates errors of the underlying writer.
    pub fn format_record(out: &mut impl fmt::Write, record: &Record) -> fmt::Result {
        writeln!(out, "[{}] {}: {}", record.level(), record.target(), record.args())
    }
}

struct ConsoleLine<'r, 'a>(&'r Record<'a>);

impl fmt::Display for ConsoleLine<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        EarlyConLogger::format_record(f, self.0)
    }
}

impl Log for EarlyConLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Keep allocations out; format directly into the console.
        early_trace!("{}", ConsoleLine(record));
    }

    fn flush(&self) {
        // polled console, nothing buffered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn record_format() {
        let mut out = String::new();
        EarlyConLogger::format_record(
            &mut out,
            &Record::builder()
                .level(Level::Info)
                .target("mach_embedsky2440")
                .args(format_args!("map_io: {} static mappings", 4))
                .build(),
        )
        .unwrap();
        assert_eq!(out, "[INFO] mach_embedsky2440: map_io: 4 static mappings\n");
    }

    #[test]
    fn level_filter() {
        let logger = EarlyConLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }
}
