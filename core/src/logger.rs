//! In-process debug logger
//!
//! Keeps a bounded ring buffer of recent entries and optionally appends
//! every entry to a file. The TUI owns stdout, so nothing is printed.
//! The same logger backs the `log` crate facade once [`install`] runs.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

pub const DEFAULT_MAX_ENTRIES: usize = 1000;

#[derive(Debug, Clone)]
pub struct DebugLogEntry {
    pub timestamp: String,
    pub level: String,
    pub module: String,
    pub message: String,
}

impl DebugLogEntry {
    pub fn render(&self) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            self.timestamp, self.level, self.module, self.message
        )
    }
}

pub struct DebugLogger {
    ring_buffer: VecDeque<DebugLogEntry>,
    max_entries: usize,
    file_path: Option<PathBuf>,
}

static LOGGER: OnceLock<Arc<Mutex<DebugLogger>>> = OnceLock::new();

fn get_logger() -> &'static Arc<Mutex<DebugLogger>> {
    LOGGER.get_or_init(|| Arc::new(Mutex::new(DebugLogger::new(DEFAULT_MAX_ENTRIES))))
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            ring_buffer: VecDeque::with_capacity(max_entries),
            max_entries,
            file_path: None,
        }
    }

    pub fn set_file_path(&mut self, path: PathBuf) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        self.file_path = Some(path);
    }

    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries.max(1);
        while self.ring_buffer.len() > self.max_entries {
            self.ring_buffer.pop_front();
        }
    }

    pub fn log(&mut self, level: &str, module: &str, message: &str) {
        let entry = DebugLogEntry {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level: level.to_string(),
            module: module.to_string(),
            message: message.to_string(),
        };

        if let Some(path) = &self.file_path {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", entry.render());
            }
        }

        if self.ring_buffer.len() >= self.max_entries {
            self.ring_buffer.pop_front();
        }
        self.ring_buffer.push_back(entry);
    }

    /// Most recent entries first.
    pub fn get_recent(&self, n: usize) -> Vec<String> {
        self.ring_buffer
            .iter()
            .rev()
            .take(n)
            .map(DebugLogEntry::render)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ring_buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring_buffer.is_empty()
    }
}

/// Configure the process-wide logger. `log_file` of `None` keeps it in memory only.
pub fn init(log_file: Option<PathBuf>, max_entries: usize) {
    let Ok(mut logger) = get_logger().lock() else {
        return;
    };
    logger.set_max_entries(max_entries);
    if let Some(path) = log_file {
        logger.set_file_path(path);
    }
}

pub fn log(level: &str, module: &str, message: impl Into<String>) {
    if let Ok(mut logger) = get_logger().lock() {
        logger.log(level, module, &message.into());
    }
}

pub fn get_recent_logs(n: usize) -> Vec<String> {
    get_logger()
        .lock()
        .map(|logger| logger.get_recent(n))
        .unwrap_or_default()
}

/// Bridges the `log` facade into the ring buffer.
struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        log(
            record.level().as_str(),
            record.module_path().unwrap_or("unknown"),
            record.args().to_string(),
        );
    }

    fn flush(&self) {}
}

static BRIDGE: LogBridge = LogBridge;

/// Install the bridge as the global `log` backend. Safe to call more than once.
pub fn install(level: log::LevelFilter) {
    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(level);
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::log("DEBUG", module_path!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::logger::log("INFO", module_path!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logger::log("ERROR", module_path!(), format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut logger = DebugLogger::new(2);
        logger.log("INFO", "test", "first");
        logger.log("INFO", "test", "second");
        logger.log("INFO", "test", "third");

        let recent = logger.get_recent(10);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("third"));
        assert!(recent[1].ends_with("second"));
    }

    #[test]
    fn test_shrinking_capacity_trims_buffer() {
        let mut logger = DebugLogger::new(5);
        for i in 0..5 {
            logger.log("DEBUG", "test", &format!("entry {i}"));
        }
        logger.set_max_entries(2);
        assert_eq!(logger.len(), 2);
        assert!(logger.get_recent(1)[0].ends_with("entry 4"));
    }

    #[test]
    fn test_file_output() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("debug.log");
        let mut logger = DebugLogger::new(10);
        logger.set_file_path(path.clone());
        logger.log("ERROR", "daycare_core::test", "boom");

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("[ERROR] [daycare_core::test] boom"));
    }

    #[test]
    fn test_macros_reach_global_buffer() {
        crate::info_log!("[TEST] marker {}", 42);
        let recent = get_recent_logs(50);
        assert!(recent.iter().any(|line| line.contains("[TEST] marker 42")));
    }
}
