//! Logger trait definition.

use std::error::Error;
use std::fmt;

/// Severity of a log message.
///
/// Levels are ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the arguments accompanying a log message.
///
/// Each variant corresponds to one way a message can be emitted:
/// verbatim, with one, two or any number of placeholder arguments, or
/// together with an error value. Backends decide how placeholders are
/// substituted and how errors are rendered.
#[derive(Clone, Copy)]
pub enum LogArgs<'a> {
    /// The message is emitted verbatim.
    None,
    /// The message is a format with a single argument.
    One(&'a dyn fmt::Display),
    /// The message is a format with two arguments.
    Two(&'a dyn fmt::Display, &'a dyn fmt::Display),
    /// The message is a format with an ordered sequence of arguments.
    Many(&'a [&'a dyn fmt::Display]),
    /// The message accompanies an error.
    Error(&'a (dyn Error + 'a)),
}

impl<'a> LogArgs<'a> {
    /// Placeholder arguments in their original order.
    ///
    /// Empty for [`LogArgs::None`] and [`LogArgs::Error`].
    pub fn arguments(&self) -> Vec<&'a dyn fmt::Display> {
        match *self {
            LogArgs::None | LogArgs::Error(_) => Vec::new(),
            LogArgs::One(arg) => vec![arg],
            LogArgs::Two(arg1, arg2) => vec![arg1, arg2],
            LogArgs::Many(args) => args.to_vec(),
        }
    }

    /// The accompanying error, if any.
    pub fn error(&self) -> Option<&'a (dyn Error + 'a)> {
        match *self {
            LogArgs::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Debug for LogArgs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.arguments().iter().map(|a| a.to_string()).collect();
        match self {
            LogArgs::None => f.write_str("None"),
            LogArgs::One(_) => f.debug_tuple("One").field(&rendered[0]).finish(),
            LogArgs::Two(_, _) => f
                .debug_tuple("Two")
                .field(&rendered[0])
                .field(&rendered[1])
                .finish(),
            LogArgs::Many(_) => f.debug_tuple("Many").field(&rendered).finish(),
            LogArgs::Error(error) => f.debug_tuple("Error").field(&error.to_string()).finish(),
        }
    }
}

/// Logging backend used by [`SemanticLogger`](crate::SemanticLogger).
///
/// Implementations receive the message and its arguments exactly as the
/// caller supplied them. Formatting, filtering and output are entirely the
/// backend's business.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use semantic_logger::log::{LogArgs, LogLevel, Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info("Application started");
/// logger.log(LogLevel::Warn, "Retry {} of {}", LogArgs::Two(&1, &3));
/// ```
pub trait Logger: Send + Sync {
    /// Name under which this logger was resolved.
    fn name(&self) -> &str;

    /// Log a message at the specified level.
    ///
    /// This is the core method that implementations must provide.
    /// The convenience methods (`debug`, `info`, `warn`, `error`)
    /// delegate to this method.
    fn log(&self, level: LogLevel, message: &str, args: LogArgs<'_>);

    /// Log a debug-level message.
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, LogArgs::None);
    }

    /// Log an info-level message.
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, LogArgs::None);
    }

    /// Log a warning-level message.
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, LogArgs::None);
    }

    /// Log an error-level message.
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, LogArgs::None);
    }
}
