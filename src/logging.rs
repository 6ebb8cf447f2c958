//! A file-backed logger for the frontends. The terminal belongs to the game, so nothing gets logged there.

use log::{LevelFilter, Log, Metadata, Record};
use std::env;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// The environment variable holding the log level (`error`, `warn`, `info`, `debug` or `trace`).
pub const LOG_LEVEL_VARIABLE: &str = "MINEFIELD_LOG";

struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {} - {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Parses a level name, falling back to `info` if it's missing or invalid.
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Appends the log records to the file at `path`, with the level taken from the `MINEFIELD_LOG` environment variable.
///
/// Only the first call installs the logger, later ones are ignored.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let level = parse_level(env::var(LOG_LEVEL_VARIABLE).ok().as_deref());

    let logger = FileLogger {
        file: Mutex::new(file),
    };
    let _ = log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level));

    Ok(())
}
