//! No-operation logger implementation.

use crate::log::{LogArgs, LogLevel, Logger};

/// A logger that discards all messages.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use semantic_logger::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("This message is discarded");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn name(&self) -> &str {
        "NOP"
    }

    #[inline]
    fn log(&self, _level: LogLevel, _message: &str, _args: LogArgs<'_>) {}
}
