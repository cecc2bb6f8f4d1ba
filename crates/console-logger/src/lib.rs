//! Console Logger
//!
//! `log` backend for the browser. Records go to the devtools console and
//! into a fixed-size circular buffer so the most recent lines can be read
//! back from inside the app.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Number of formatted lines kept in the circular buffer
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("a logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Logger writing to the browser console with a bounded history
pub struct ConsoleLogger {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(DEFAULT_CAPACITY);

impl ConsoleLogger {
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: Mutex::new(VecDeque::new()),
        }
    }

    /// Most recent lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

// No console outside the browser; the buffer still records.
#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install the global logger at `level`
pub fn init(level: LevelFilter) -> Result<(), InitError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// The installed logger, for reading back recent lines
pub fn logger() -> &'static ConsoleLogger {
    &LOGGER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_line(logger: &ConsoleLogger, text: &str) {
        logger.push(text.to_string());
    }

    #[test]
    fn test_buffer_keeps_most_recent() {
        let logger = ConsoleLogger::new(3);
        for i in 0..5 {
            record_line(&logger, &format!("line {}", i));
        }
        assert_eq!(logger.recent(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(0);
        record_line(&logger, "dropped");
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("items")
                .args(format_args!("added {}", 1))
                .build(),
        );
        assert_eq!(line, "[INFO] items: added 1");
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init(LevelFilter::Debug);
        assert!(matches!(init(LevelFilter::Debug), Err(InitError::AlreadyInstalled(_))));
    }

    #[test]
    fn test_installed_logger_records_lines() {
        let _ = init(LevelFilter::Debug);
        log::info!(target: "buffer_check", "hello {}", 7);
        assert!(logger()
            .recent()
            .iter()
            .any(|line| line == "[INFO] buffer_check: hello 7"));
    }
}
