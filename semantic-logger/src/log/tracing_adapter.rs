//! Tracing library adapter implementation.

use crate::log::format::{format_message, ErrorChain};
use crate::log::{LogArgs, LogLevel, Logger};

/// Logger implementation that delegates to the `tracing` crate.
///
/// The logger name is attached to every event as the `logger` field, since
/// `tracing` targets must be known at compile time. Placeholders are
/// substituted with [`format_message`] before the event is emitted, and
/// errors are attached as the `error` field including their source chain.
///
/// Every event has this module as its target, so `RUST_LOG` directives
/// cannot select individual logger names; the level applies to all
/// semantic loggers at once via `semantic_logger::log::tracing_adapter`.
///
/// # Example
///
/// ```
/// use semantic_logger::log::{Logger, TracingLogger};
/// use std::sync::Arc;
///
/// // Assumes tracing subscriber is already initialized
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger::named("billing"));
/// logger.info("Using tracing backend");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    /// Create a tracing logger with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create a tracing logger named after the fully-qualified path of `T`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: LogLevel, message: &str, args: LogArgs<'_>) {
        let logger = self.name.as_str();
        match args {
            LogArgs::None => emit(level, logger, message),
            LogArgs::Error(error) => {
                let error = ErrorChain(error);
                match level {
                    LogLevel::Debug => {
                        tracing::debug!(logger = logger, error = %error, "{}", message)
                    }
                    LogLevel::Info => {
                        tracing::info!(logger = logger, error = %error, "{}", message)
                    }
                    LogLevel::Warn => {
                        tracing::warn!(logger = logger, error = %error, "{}", message)
                    }
                    LogLevel::Error => {
                        tracing::error!(logger = logger, error = %error, "{}", message)
                    }
                }
            }
            _ => emit(level, logger, &format_message(message, &args.arguments())),
        }
    }
}

fn emit(level: LogLevel, logger: &str, message: &str) {
    match level {
        LogLevel::Debug => tracing::debug!(logger = logger, "{}", message),
        LogLevel::Info => tracing::info!(logger = logger, "{}", message),
        LogLevel::Warn => tracing::warn!(logger = logger, "{}", message),
        LogLevel::Error => tracing::error!(logger = logger, "{}", message),
    }
}
