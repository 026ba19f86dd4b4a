//! Logging backend abstraction.
//!
//! [`SemanticLogger`](crate::SemanticLogger) never talks to a logging library
//! directly. It forwards every call to a [`Logger`], which any backend can
//! implement.
//!
//! # Architecture
//!
//! - `Logger` trait: the backend capability, one leveled `log` operation
//!   taking the message and its [`LogArgs`]
//! - `TracingLogger`: production adapter that delegates to the `tracing` crate
//! - `NoOpLogger`: silent logger for benchmarking and quiet modes
//! - `RecordingLogger`: in-memory test double that remembers every call
//!
//! # Usage
//!
//! ```
//! use semantic_logger::log::{LogArgs, LogLevel, Logger, RecordingLogger};
//!
//! let logger = RecordingLogger::new("orders");
//! logger.log(LogLevel::Info, "order {} shipped", LogArgs::One(&42));
//!
//! let records = logger.records();
//! assert_eq!(records[0].args, vec!["42"]);
//! ```

mod format;
mod noop;
mod recording;
mod tracing_adapter;
mod r#trait;

pub use format::{format_message, ErrorChain};
pub use noop::NoOpLogger;
pub use r#trait::{LogArgs, LogLevel, Logger};
pub use recording::{LogRecord, RecordingLogger};
pub use tracing_adapter::TracingLogger;
