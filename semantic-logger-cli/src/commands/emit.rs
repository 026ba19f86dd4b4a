//! Emit a single message through a semantic logger.

use std::fmt::{self, Display};

use clap::Args;
use semantic_logger::log::LogArgs;
use semantic_logger::{Intent, SemanticLogger};

use crate::error::CliError;

/// Arguments for `semlog emit`.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// What the message means: for-test-purpose, as-expected-by-default,
    /// to-investigate-tomorrow or wake-me-up-in-the-middle-of-the-night
    pub intent: Intent,

    /// Message, or format with `{}` placeholders when arguments follow
    pub format: String,

    /// Values substituted into the placeholders, in order
    pub args: Vec<String>,

    /// Attach an error with this description instead of arguments
    #[arg(long, conflicts_with = "args")]
    pub error: Option<String>,
}

/// Error described on the command line.
#[derive(Debug)]
struct ReportedError(String);

impl Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ReportedError {}

/// Run the emit command.
pub fn run(logger: &SemanticLogger, args: EmitArgs) -> Result<(), CliError> {
    if let Some(description) = args.error {
        let error = ReportedError(description);
        logger.emit(args.intent, &args.format, LogArgs::Error(&error));
        return Ok(());
    }

    let values: Vec<&dyn Display> = args.args.iter().map(|a| a as &dyn Display).collect();
    logger.emit(args.intent, &args.format, shape(&values));
    Ok(())
}

/// Pick the argument shape matching the number of values.
fn shape<'a>(values: &'a [&'a dyn Display]) -> LogArgs<'a> {
    match values {
        [] => LogArgs::None,
        [arg] => LogArgs::One(*arg),
        [arg1, arg2] => LogArgs::Two(*arg1, *arg2),
        _ => LogArgs::Many(values),
    }
}
