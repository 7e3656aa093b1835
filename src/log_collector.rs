//! Session logging pipeline.
//!
//! Every `log::info!()`/`warn!()`/... call is timestamped and pushed onto an
//! unbounded crossbeam channel. A dedicated OS thread drains it, appending
//! each line to `logs/<YYYYmmdd-HHMMSS>.log` and mirroring it to stderr.
//!
//! ```text
//! log::info!(..)  (UI thread, tokio workers)
//!     |
//! [LogCollector] --crossbeam--> [writer thread] --> logs/<session>.log
//!                                               \-> stderr
//! ```
//!
//! Sending never blocks the caller, so logging from the egui frame loop is
//! safe. `flush()` waits until everything queued before it is on disk.

use chrono::Local;
use crossbeam_channel::{unbounded, Sender};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Dependencies (reqwest, hyper, winit...) are never logged below this level
const DEPENDENCY_LEVEL: LevelFilter = LevelFilter::Info;

/// Internal log line or special marker
enum LogMessage {
    Line(LogLine),
    /// Flush marker with channel sender to signal completion
    Flush(std::sync::mpsc::Sender<()>),
}

/// A formatted log record
#[derive(Clone, Debug)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub message: String,
}

impl LogLine {
    pub fn new(level: Level, message: String) -> Self {
        LogLine {
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
            level,
            message,
        }
    }

    fn render(&self) -> String {
        format!("[{}] [{}] {}", self.timestamp, self.level, self.message)
    }
}

/// Get the logs path relative to the current working directory: ./logs
pub fn get_global_logs_path() -> Result<PathBuf, String> {
    let cwd = std::env::current_dir()
        .map_err(|e| format!("Failed to get current working directory: {}", e))?;
    Ok(cwd.join("logs"))
}

/// `log::Log` implementation backed by a background writer thread
#[derive(Clone)]
pub struct LogCollector {
    tx: Sender<LogMessage>,
    level: LevelFilter,
    session_path: PathBuf,
}

impl LogCollector {
    /// Create the session file under `log_dir` and start the writer thread
    pub fn new(log_dir: &Path, level: LevelFilter, mirror_stderr: bool) -> Result<Self, String> {
        std::fs::create_dir_all(log_dir)
            .map_err(|e| format!("Failed to create logs directory: {}", e))?;

        let session_path = log_dir.join(format!("{}.log", Local::now().format("%Y%m%d-%H%M%S")));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&session_path)
            .map_err(|e| format!("Failed to open log file {}: {}", session_path.display(), e))?;

        let (tx, rx) = unbounded::<LogMessage>();

        // Plain OS thread: works no matter which runtime (if any) the caller is on
        std::thread::Builder::new()
            .name("log-writer".to_string())
            .spawn(move || {
                while let Ok(msg) = rx.recv() {
                    match msg {
                        LogMessage::Line(line) => {
                            let rendered = line.render();
                            let _ = writeln!(file, "{}", rendered);
                            if mirror_stderr {
                                eprintln!("{}", rendered);
                            }
                        }
                        LogMessage::Flush(done) => {
                            let _ = file.flush();
                            let _ = file.sync_data();
                            let _ = done.send(());
                        }
                    }
                }
                let _ = file.flush();
            })
            .map_err(|e| format!("Failed to start log writer thread: {}", e))?;

        Ok(LogCollector {
            tx,
            level,
            session_path,
        })
    }

    /// Register as the global logger
    pub fn install(self) -> Result<(), String> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))
            .map_err(|e| format!("Failed to install logger: {}", e))?;
        log::set_max_level(level);
        Ok(())
    }

    pub fn session_log_path(&self) -> &Path {
        &self.session_path
    }

    /// Queue a line without blocking
    pub fn log_line(&self, line: LogLine) {
        let _ = self.tx.send(LogMessage::Line(line));
    }

    /// Block until every line queued before this call has been written
    pub fn wait_for_empty(&self) -> Result<(), String> {
        let (done_tx, done_rx) = std::sync::mpsc::channel::<()>();
        self.tx
            .send(LogMessage::Flush(done_tx))
            .map_err(|e| format!("Failed to send flush marker: {}", e))?;
        done_rx
            .recv()
            .map_err(|e| format!("Flush signal interrupted: {}", e))
    }

    fn is_own_target(target: &str) -> bool {
        target.starts_with(env!("CARGO_CRATE_NAME"))
    }
}

impl Log for LogCollector {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let ceiling = if Self::is_own_target(metadata.target()) {
            self.level
        } else {
            self.level.min(DEPENDENCY_LEVEL)
        };
        metadata.level() <= ceiling
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.log_line(LogLine::new(record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {
        let _ = self.wait_for_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Record;
    use tempfile::TempDir;

    fn record_at<'a>(level: Level, target: &'a str, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target(target).args(args).build()
    }

    #[test]
    fn test_session_file_created() {
        let temp_dir = TempDir::new().unwrap();
        let collector = LogCollector::new(&temp_dir.path().join("logs"), LevelFilter::Info, false).unwrap();

        let path = collector.session_log_path();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));
    }

    #[test]
    fn test_flush_persists_everything_queued() {
        let temp_dir = TempDir::new().unwrap();
        let collector = LogCollector::new(temp_dir.path(), LevelFilter::Debug, false).unwrap();

        for i in 0..500 {
            collector.log_line(LogLine::new(Level::Info, format!("[TEST] line {}", i)));
        }
        collector.wait_for_empty().unwrap();

        let content = std::fs::read_to_string(collector.session_log_path()).unwrap();
        assert_eq!(content.lines().count(), 500);
        assert!(content.contains("[INFO] [TEST] line 499"));
    }

    #[test]
    fn test_level_filtering() {
        let temp_dir = TempDir::new().unwrap();
        let collector = LogCollector::new(temp_dir.path(), LevelFilter::Info, false).unwrap();

        collector.log(&record_at(Level::Debug, "hwcompare::ui", format_args!("hidden")));
        collector.log(&record_at(Level::Warn, "hwcompare::ui", format_args!("shown")));
        collector.log(&record_at(Level::Info, "hyper::client", format_args!("dependency info")));
        Log::flush(&collector);

        let content = std::fs::read_to_string(collector.session_log_path()).unwrap();
        assert!(!content.contains("hidden"));
        assert!(content.contains("[WARN] shown"));
        assert!(content.contains("dependency info"));
    }

    #[test]
    fn test_dependency_debug_suppressed() {
        let temp_dir = TempDir::new().unwrap();
        let collector = LogCollector::new(temp_dir.path(), LevelFilter::Trace, false).unwrap();

        assert!(collector.enabled(&record_at(Level::Trace, "hwcompare", format_args!("")).metadata().clone()));
        assert!(!collector.enabled(&record_at(Level::Debug, "reqwest::connect", format_args!("")).metadata().clone()));
    }
}
