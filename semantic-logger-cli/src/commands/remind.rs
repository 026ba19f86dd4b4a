//! Deadline-gated reminder command.

use std::sync::Arc;

use clap::Args;
use semantic_logger::deadline::parse_deadline;
use semantic_logger::{FixedClock, SemanticLogger};
use tracing::debug;

use crate::error::CliError;

/// Arguments for `semlog remind`.
#[derive(Debug, Args)]
pub struct RemindArgs {
    /// Deadline in ISO format (e.g. 2018-10-23)
    pub deadline: String,

    /// Message logged at error level once the deadline has passed
    pub message: String,

    /// Pretend today is this ISO date instead of reading the system clock
    #[arg(long)]
    pub today: Option<String>,
}

/// Reminder whose dates have been checked.
#[derive(Debug)]
pub struct Reminder {
    deadline: String,
    message: String,
    clock: Option<FixedClock>,
}

impl RemindArgs {
    /// Check both dates before anything is logged.
    pub fn validate(self) -> Result<Reminder, CliError> {
        parse_deadline(&self.deadline)?;

        let clock = match self.today {
            Some(today) => {
                let date = parse_deadline(&today).map_err(|_| CliError::InvalidArgument {
                    option: "--today",
                    value: today.clone(),
                    reason: "expected an ISO date like 2018-10-23".to_string(),
                })?;
                Some(FixedClock::new(date))
            }
            None => None,
        };

        Ok(Reminder {
            deadline: self.deadline,
            message: self.message,
            clock,
        })
    }
}

/// Run the remind command.
pub fn run(logger: SemanticLogger, reminder: Reminder) -> Result<(), CliError> {
    let logger = match reminder.clock {
        Some(clock) => {
            debug!(?clock, "Using fixed clock");
            logger.with_clock(Arc::new(clock))
        }
        None => logger,
    };

    logger.remind_to_remove_unused_implementation_after(&reminder.deadline, &reminder.message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semantic_logger::log::{LogLevel, RecordingLogger};
    use semantic_logger::SemanticLoggerFactory;

    fn remind_args(deadline: &str, today: Option<&str>) -> RemindArgs {
        RemindArgs {
            deadline: deadline.to_string(),
            message: "Remove legacy importer".to_string(),
            today: today.map(str::to_string),
        }
    }

    fn run_recorded(args: RemindArgs) -> (Arc<RecordingLogger>, Result<(), CliError>) {
        let backend = Arc::new(RecordingLogger::new("semlog"));
        let logger = SemanticLoggerFactory::from_logger(backend.clone());
        let result = args.validate().and_then(|reminder| run(logger, reminder));
        (backend, result)
    }

    #[test]
    fn test_fires_after_deadline() {
        let (backend, result) = run_recorded(remind_args("2018-10-23", Some("2018-10-24")));

        assert!(result.is_ok());
        let records = backend.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Error);
        assert_eq!(records[0].message, "Remove legacy importer");
    }

    #[test]
    fn test_quiet_on_deadline_day() {
        let (backend, result) = run_recorded(remind_args("2018-10-23", Some("2018-10-23")));

        assert!(result.is_ok());
        assert!(backend.is_empty());
    }

    #[test]
    fn test_invalid_today_names_the_option() {
        let (backend, result) = run_recorded(remind_args("2018-10-23", Some("yesterday")));

        let err = result.unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { option: "--today", .. }));
        assert!(err.to_string().contains("--today"));
        assert!(err.to_string().contains("yesterday"));
        assert!(!err.to_string().contains("deadline"));
        assert!(backend.is_empty());
    }

    #[test]
    fn test_invalid_deadline_is_rejected_before_logging() {
        let (backend, result) = run_recorded(remind_args("2018-13-45", Some("2018-10-24")));

        assert!(matches!(result, Err(CliError::Deadline(_))));
        assert!(backend.is_empty());
    }
}
