//! Construction of [`SemanticLogger`] instances.

use std::sync::Arc;

use crate::log::Logger;
use crate::semantic::SemanticLogger;

/// Entry point for obtaining semantic loggers.
///
/// Every call builds a new [`SemanticLogger`]; nothing is cached. Loggers
/// resolved by type or name are backed by
/// [`TracingLogger`](crate::log::TracingLogger).
///
/// # Example
///
/// ```
/// use semantic_logger::log::RecordingLogger;
/// use semantic_logger::SemanticLoggerFactory;
/// use std::sync::Arc;
///
/// struct OrderService;
///
/// let by_type = SemanticLoggerFactory::get_logger_for::<OrderService>();
/// let by_name = SemanticLoggerFactory::get_logger("orders");
/// let injected = SemanticLoggerFactory::from_logger(Arc::new(RecordingLogger::new("test")));
///
/// assert!(by_type.name().ends_with("OrderService"));
/// assert_eq!(by_name.name(), "orders");
/// assert_eq!(injected.name(), "test");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticLoggerFactory;

impl SemanticLoggerFactory {
    /// Create a logger named after the fully-qualified path of `T`.
    pub fn get_logger_for<T: ?Sized>() -> SemanticLogger {
        SemanticLogger::for_type::<T>()
    }

    /// Create a logger with the given name.
    pub fn get_logger(name: &str) -> SemanticLogger {
        SemanticLogger::named(name)
    }

    /// Create a logger that delegates to an existing backend.
    pub fn from_logger(delegate: Arc<dyn Logger>) -> SemanticLogger {
        SemanticLogger::with_logger(delegate)
    }
}
