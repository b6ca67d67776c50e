// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Log entry - the logging library's own record type.
//!
//! Entries are themselves renderable, so a log line may carry another entry
//! (e.g. a forwarded record) as a context field.

use crate::value::{Object, TypeInfo, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type of [`LogEntry`] objects.
pub static LOG_ENTRY_TYPE: TypeInfo = TypeInfo {
    name: "LogEntry",
    parents: &[],
};

/// Log severity levels (compatible with ROS 2 rcl_interfaces/Log).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[derive(Default)]
pub enum LogLevel {
    /// Debug messages for development.
    Debug = 10,
    /// Informational messages.
    #[default]
    Info = 20,
    /// Warning messages.
    Warn = 30,
    /// Error messages.
    Error = 40,
    /// Fatal/critical errors.
    Fatal = 50,
}

impl LogLevel {
    /// Get level name as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A log record.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Timestamp when log was generated.
    pub timestamp: DateTime<Utc>,
    /// Log severity level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Logger name.
    pub logger: Option<String>,
    /// Context fields, in insertion order.
    pub context: Vec<(String, Value)>,
}

impl Default for LogEntry {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            message: String::new(),
            logger: None,
            context: Vec::new(),
        }
    }
}

impl LogEntry {
    /// Create a new log entry with message.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            ..Default::default()
        }
    }

    /// Set timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set logger name.
    pub fn with_logger(mut self, logger: impl Into<String>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    /// Add a context field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Human-readable line: `<timestamp> [LEVEL] logger: message`.
    pub fn line(&self) -> String {
        let ts = self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        match self.logger {
            Some(ref logger) => format!(
                "{} [{:5}] {}: {}",
                ts,
                self.level.as_str(),
                logger,
                self.message
            ),
            None => format!("{} [{:5}] {}", ts, self.level.as_str(), self.message),
        }
    }
}

impl Object for LogEntry {
    fn type_info(&self) -> &'static TypeInfo {
        &LOG_ENTRY_TYPE
    }

    fn display(&self) -> Option<String> {
        Some(self.line())
    }

    fn fields(&self) -> Vec<(String, Value)> {
        vec![
            ("timestamp".to_string(), Value::from(self.timestamp.to_rfc3339())),
            ("level".to_string(), Value::from(self.level.as_str())),
            ("logger".to_string(), Value::from(self.logger.clone())),
            ("message".to_string(), Value::from(self.message.as_str())),
            ("context".to_string(), Value::Map(self.context.clone())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> LogEntry {
        LogEntry::new(LogLevel::Warn, "queue almost full")
            .with_timestamp(
                DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
            )
            .with_logger("hdds.writer")
            .with_field("depth", 98)
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_line() {
        assert_eq!(
            sample_entry().line(),
            "2024-01-15 10:30:00.000 [WARN ] hdds.writer: queue almost full"
        );

        let anonymous = LogEntry {
            logger: None,
            ..sample_entry()
        };
        assert_eq!(
            anonymous.line(),
            "2024-01-15 10:30:00.000 [WARN ] queue almost full"
        );
    }

    #[test]
    fn test_entry_is_object() {
        let value = Value::object(sample_entry());

        assert_eq!(value.type_name(), "LogEntry");
        assert_eq!(
            value.dump(),
            "LogEntry { timestamp: \"2024-01-15T10:30:00+00:00\", level: \"WARN\", \
             logger: \"hdds.writer\", message: \"queue almost full\", context: {depth: 98} }"
        );
    }
}
