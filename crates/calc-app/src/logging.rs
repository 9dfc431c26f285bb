//! Diagnostic logging for calc-app.
//!
//! Diagnostics always go to stderr; stdout carries only the status stream
//! the harness reads.

use std::fmt;
use std::io::Write;

// ---------------------------------------------------------------------------
// Log level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// Returns true if a message at `msg_level` passes this filter level.
    pub fn should_log(self, msg_level: LogLevel) -> bool {
        msg_level >= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Log format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Console,
    Json,
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    /// Warn keeps stderr silent while the emitter is healthy.
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Console,
        }
    }
}

/// A structured logger with component/field context.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    format: LogFormat,
    fields: Vec<(String, String)>,
}

impl Logger {
    pub fn new(cfg: &LoggingConfig) -> Self {
        Self {
            level: cfg.level,
            format: cfg.format,
            fields: Vec::new(),
        }
    }

    /// Create a child logger with an additional field.
    pub fn with_field(&self, key: &str, value: &str) -> Self {
        let mut child = self.clone();
        child.fields.push((key.to_string(), value.to_string()));
        child
    }

    /// Create a child logger for a named component.
    pub fn component(&self, name: &str) -> Self {
        self.with_field("component", name)
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level.should_log(level)
    }

    /// Render one record, or `None` when `level` is filtered out.
    pub fn format_record(
        &self,
        level: LogLevel,
        msg: &str,
        extra: &[(&str, &str)],
    ) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }
        let all_fields = self
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(extra.iter().copied());

        match self.format {
            LogFormat::Console => {
                let mut line = format!("{} {level} ", chrono::Utc::now().format("%H:%M:%S"));
                for (k, v) in all_fields {
                    line.push_str(&format!("{k}={v} "));
                }
                line.push_str(msg);
                Some(line)
            }
            LogFormat::Json => {
                let mut record = serde_json::Map::new();
                record.insert(
                    "time".into(),
                    serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
                );
                record.insert("level".into(), serde_json::Value::String(level.to_string()));
                for (k, v) in all_fields {
                    record.insert(k.to_string(), serde_json::Value::String(v.to_string()));
                }
                record.insert("message".into(), serde_json::Value::String(msg.to_string()));
                Some(serde_json::Value::Object(record).to_string())
            }
        }
    }

    /// Write one record to `sink`; filtered records and write errors are dropped.
    pub fn write_record(
        &self,
        sink: &mut dyn Write,
        level: LogLevel,
        msg: &str,
        extra: &[(&str, &str)],
    ) {
        if let Some(line) = self.format_record(level, msg, extra) {
            let _ = writeln!(sink, "{line}");
        }
    }

    /// Log a message with extra inline fields to the process stderr.
    pub fn log_with_fields(&self, level: LogLevel, msg: &str, extra: &[(&str, &str)]) {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        self.write_record(&mut handle, level, msg, extra);
    }

    pub fn debug_with(&self, msg: &str, fields: &[(&str, &str)]) {
        self.log_with_fields(LogLevel::Debug, msg, fields);
    }
}

/// Logger for the emitter binary, tagged with component "calc-app".
pub fn init_logger(cfg: &LoggingConfig) -> Logger {
    Logger::new(cfg).component("calc-app")
}

// ---------------------------------------------------------------------------
// Version info
// ---------------------------------------------------------------------------

/// Build information injected at compile time or defaulting to "dev".
#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub version: String,
    pub commit: String,
    pub date: String,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            version: option_env!("CALC_APP_VERSION")
                .unwrap_or(env!("CARGO_PKG_VERSION"))
                .to_string(),
            commit: option_env!("CALC_APP_COMMIT").unwrap_or("none").to_string(),
            date: option_env!("CALC_APP_BUILD_DATE")
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}
