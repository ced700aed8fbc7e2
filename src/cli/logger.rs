//! Minimal stderr logger for the `phonolex` binary

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", level_label(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

fn level_label(level: Level) -> colored::ColoredString {
    let label = level.as_str().to_lowercase();
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow().bold(),
        Level::Info => label.green(),
        Level::Debug | Level::Trace => label.dimmed(),
    }
}

/// The level filter for a verbosity flag.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger. Later calls only adjust the level.
pub fn init(verbose: bool) {
    // Already installed.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_for(verbose));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Warn);
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
