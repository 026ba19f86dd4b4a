//! In-memory logger that records every call.

use std::sync::{Mutex, MutexGuard};

use crate::log::format::ErrorChain;
use crate::log::{LogArgs, LogLevel, Logger};

/// A single call received by a [`RecordingLogger`].
///
/// Arguments and errors are stored rendered, since the borrowed values
/// passed to [`Logger::log`] do not outlive the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Level the message was emitted at
    pub level: LogLevel,
    /// Message or format string, exactly as received
    pub message: String,
    /// Placeholder arguments in the order received
    pub args: Vec<String>,
    /// Accompanying error with its source chain, if any
    pub error: Option<String>,
}

/// Logger that keeps every call in memory instead of emitting it.
///
/// This is the test double for code built on
/// [`SemanticLogger`](crate::SemanticLogger): inject it through
/// [`SemanticLoggerFactory::from_logger`](crate::SemanticLoggerFactory::from_logger)
/// and assert on [`records`](Self::records) afterwards. No placeholder
/// substitution happens here.
///
/// # Example
///
/// ```
/// use semantic_logger::log::{LogLevel, RecordingLogger};
/// use semantic_logger::SemanticLoggerFactory;
/// use std::sync::Arc;
///
/// let backend = Arc::new(RecordingLogger::new("test"));
/// let logger = SemanticLoggerFactory::from_logger(backend.clone());
///
/// logger.to_investigate_tomorrow("disk almost full");
///
/// assert_eq!(backend.records_at(LogLevel::Warn).len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingLogger {
    name: String,
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    /// Create an empty recording logger.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// All records in the order they were received.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Records emitted at `level`.
    pub fn records_at(&self, level: LogLevel) -> Vec<LogRecord> {
        self.lock()
            .iter()
            .filter(|record| record.level == level)
            .cloned()
            .collect()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget all records.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Logger for RecordingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: LogLevel, message: &str, args: LogArgs<'_>) {
        let record = LogRecord {
            level,
            message: message.to_string(),
            args: args.arguments().iter().map(|arg| arg.to_string()).collect(),
            error: args.error().map(|error| ErrorChain(error).to_string()),
        };
        self.lock().push(record);
    }
}
