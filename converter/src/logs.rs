//! Leveled progress logging for the conversion passes.
//!
//! Entries are emitted as `tracing` events. The library never installs a
//! subscriber; the `nlu-convert` binary does.

use serde::{Deserialize, Serialize};

/// Log level for progress messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into() }
    }

    /// Emit this entry as a `tracing` event.
    ///
    /// Success has no tracing level of its own; it goes out at INFO with a
    /// `status` field.
    pub fn emit(&self) {
        match self.level {
            LogLevel::Info => tracing::info!("{}", self.message),
            LogLevel::Success => tracing::info!(status = "success", "{}", self.message),
            LogLevel::Warning => tracing::warn!("{}", self.message),
            LogLevel::Error => tracing::error!("{}", self.message),
        }
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::error(msg).emit();
}
