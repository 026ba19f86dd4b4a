//! The semantic logging facade.

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::deadline::{is_past, parse_deadline, DeadlineError};
use crate::intent::Intent;
use crate::log::{LogArgs, LogLevel, Logger, TracingLogger};

/// Generates the five argument shapes of one intent.
macro_rules! intent_methods {
    (
        $intent:expr, $level:literal,
        $plain:ident, $one:ident, $two:ident, $many:ident, $with_error:ident
    ) => {
        #[doc = concat!("Log `message` verbatim at _", $level, "_ level.")]
        pub fn $plain(&self, message: &str) {
            self.emit($intent, message, LogArgs::None);
        }

        #[doc = concat!("Log `format` with one argument at _", $level, "_ level.")]
        pub fn $one(&self, format: &str, arg: impl Display) {
            self.emit($intent, format, LogArgs::One(&arg));
        }

        #[doc = concat!("Log `format` with two arguments at _", $level, "_ level.")]
        pub fn $two(&self, format: &str, arg1: impl Display, arg2: impl Display) {
            self.emit($intent, format, LogArgs::Two(&arg1, &arg2));
        }

        #[doc = concat!("Log `format` with any number of arguments at _", $level, "_ level.")]
        pub fn $many(&self, format: &str, arguments: &[&dyn Display]) {
            self.emit($intent, format, LogArgs::Many(arguments));
        }

        #[doc = concat!("Log `message` with an accompanying error at _", $level, "_ level.")]
        pub fn $with_error(&self, message: &str, error: &dyn Error) {
            self.emit($intent, message, LogArgs::Error(error));
        }
    };
}

/// Logger whose methods say what a message means rather than how severe it is.
///
/// Wraps a backend [`Logger`] and renames its levels:
///
/// - `debug` becomes [`for_test_purpose`](Self::for_test_purpose)
/// - `info` becomes [`as_expected_by_default`](Self::as_expected_by_default)
/// - `warn` becomes [`to_investigate_tomorrow`](Self::to_investigate_tomorrow)
/// - `error` becomes
///   [`wake_me_up_in_the_middle_of_the_night`](Self::wake_me_up_in_the_middle_of_the_night)
///
/// Every method forwards the message and its arguments unchanged and in
/// order; formatting is left to the backend. On top of that,
/// [`remind_to_remove_unused_implementation_after`](Self::remind_to_remove_unused_implementation_after)
/// only logs once a deadline has passed.
///
/// Instances are obtained from [`SemanticLoggerFactory`](crate::SemanticLoggerFactory).
///
/// # Example
///
/// ```
/// use semantic_logger::SemanticLoggerFactory;
///
/// let logger = SemanticLoggerFactory::get_logger("checkout");
///
/// logger.as_expected_by_default("Payment accepted");
/// logger.to_investigate_tomorrow_with_two("Retry {} of {}", 2, 5);
/// logger
///     .remind_to_remove_unused_implementation_after("2018-10-23", "Drop the legacy endpoint")
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct SemanticLogger {
    pub(crate) delegate: Arc<dyn Logger>,
    clock: Arc<dyn Clock>,
}

impl SemanticLogger {
    /// Wrap a backend resolved from the fully-qualified name of `T`.
    pub(crate) fn for_type<T: ?Sized>() -> Self {
        Self::with_logger(Arc::new(TracingLogger::for_type::<T>()))
    }

    /// Wrap a backend resolved by `name`.
    pub(crate) fn named(name: &str) -> Self {
        Self::with_logger(Arc::new(TracingLogger::named(name)))
    }

    /// Wrap an existing backend.
    pub(crate) fn with_logger(delegate: Arc<dyn Logger>) -> Self {
        Self {
            delegate,
            clock: Arc::new(SystemClock),
        }
    }

    /// Use `clock` instead of the system clock for deadline checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Name of the wrapped backend logger.
    pub fn name(&self) -> &str {
        self.delegate.name()
    }

    /// Forward a message to the backend at the level `intent` maps to.
    ///
    /// All semantic methods go through here.
    pub fn emit(&self, intent: Intent, message: &str, args: LogArgs<'_>) {
        self.delegate.log(intent.level(), message, args);
    }

    /// Log `message` at _error_ level if today is after `deadline`.
    ///
    /// `deadline` is an ISO date such as `2018-10-23`. The deadline day
    /// itself is still quiet; the message first appears the day after.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError`] when `deadline` is not a valid ISO date.
    /// The backend is not called in that case.
    pub fn remind_to_remove_unused_implementation_after(
        &self,
        deadline: &str,
        message: &str,
    ) -> Result<(), DeadlineError> {
        let deadline = parse_deadline(deadline)?;
        let today = self.clock.today();

        if is_past(deadline, today) {
            self.delegate.log(LogLevel::Error, message, LogArgs::None);
        } else {
            trace!(%deadline, %today, "Reminder not yet due");
        }

        Ok(())
    }

    intent_methods!(
        Intent::ForTestPurpose,
        "debug",
        for_test_purpose,
        for_test_purpose_with,
        for_test_purpose_with_two,
        for_test_purpose_with_args,
        for_test_purpose_with_error
    );

    intent_methods!(
        Intent::AsExpectedByDefault,
        "info",
        as_expected_by_default,
        as_expected_by_default_with,
        as_expected_by_default_with_two,
        as_expected_by_default_with_args,
        as_expected_by_default_with_error
    );

    intent_methods!(
        Intent::ToInvestigateTomorrow,
        "warn",
        to_investigate_tomorrow,
        to_investigate_tomorrow_with,
        to_investigate_tomorrow_with_two,
        to_investigate_tomorrow_with_args,
        to_investigate_tomorrow_with_error
    );

    intent_methods!(
        Intent::WakeMeUpInTheMiddleOfTheNight,
        "error",
        wake_me_up_in_the_middle_of_the_night,
        wake_me_up_in_the_middle_of_the_night_with,
        wake_me_up_in_the_middle_of_the_night_with_two,
        wake_me_up_in_the_middle_of_the_night_with_args,
        wake_me_up_in_the_middle_of_the_night_with_error
    );
}

impl fmt::Debug for SemanticLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticLogger")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
