//! Semantic Logger - log statements that say what they mean
//!
//! This crate wraps a leveled logging backend and renames its levels after
//! the intention behind a message:
//!
//! | Method                                  | Level   |
//! |-----------------------------------------|---------|
//! | `for_test_purpose`                      | debug   |
//! | `as_expected_by_default`                | info    |
//! | `to_investigate_tomorrow`               | warn    |
//! | `wake_me_up_in_the_middle_of_the_night` | error   |
//!
//! It also offers a reminder that stays silent until a deadline has passed
//! and then logs at error level.
//!
//! ```
//! use semantic_logger::SemanticLoggerFactory;
//!
//! struct PaymentService;
//!
//! let logger = SemanticLoggerFactory::get_logger_for::<PaymentService>();
//! logger.as_expected_by_default_with("Charged card ending in {}", 4242);
//! logger
//!     .remind_to_remove_unused_implementation_after("2018-10-23", "Old fraud check still wired in")
//!     .unwrap();
//! ```

pub mod clock;
pub mod config;
pub mod deadline;
pub mod factory;
pub mod intent;
pub mod log;
pub mod logging;
pub mod semantic;

pub use clock::{Clock, FixedClock, SystemClock};
pub use deadline::DeadlineError;
pub use factory::SemanticLoggerFactory;
pub use intent::Intent;
pub use semantic::SemanticLogger;

/// Version of the library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }
}
