use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use log::{LevelFilter, Log, Metadata, Record};

const MAX_LINES: usize = 500;

/// Recent log lines shown in the log panel
#[derive(Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn push(&self, line: String) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == MAX_LINES {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// env_logger output plus a copy of each line for the UI
struct CapturingLogger {
    inner: env_logger::Logger,
    buffer: LogBuffer,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.inner.matches(record) {
            return;
        }
        self.buffer.push(format!("[{}] {}", record.level(), record.args()));
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn rust_log_set() -> bool {
    std::env::var_os("RUST_LOG").is_some()
}

/// Initialize logging at info level. RUST_LOG takes precedence over
/// anything set later through `apply_log_level`.
pub fn init_logging() -> LogBuffer {
    let buffer = LogBuffer::default();

    let mut builder = env_logger::Builder::from_default_env();
    if !rust_log_set() {
        // The effective level is the global max level, see apply_log_level
        builder
            .filter_level(LevelFilter::Trace)
            .filter_module("winit", LevelFilter::Warn)
            .filter_module("wgpu_core", LevelFilter::Warn)
            .filter_module("eframe", LevelFilter::Warn);
    }
    builder.format_timestamp_secs();

    let inner = builder.build();
    let max_level = if rust_log_set() {
        inner.filter()
    } else {
        LevelFilter::Info
    };
    let logger = CapturingLogger {
        inner,
        buffer: buffer.clone(),
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }

    buffer
}

/// Switch to the configured level unless RUST_LOG is set
pub fn apply_log_level(level: &str) {
    if rust_log_set() {
        return;
    }
    log::set_max_level(parse_level(level));
    log::info!("Log level: {}", parse_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::default();
        for i in 0..(MAX_LINES + 10) {
            buffer.push(format!("line {}", i));
        }

        let lines = buffer.snapshot();
        assert_eq!(lines.len(), MAX_LINES);
        assert_eq!(lines[0], "line 10");
        assert_eq!(lines.last().unwrap(), &format!("line {}", MAX_LINES + 9));
    }

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
    }
}
