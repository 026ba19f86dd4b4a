//! Placeholder substitution and error rendering for text backends.

use std::error::Error;
use std::fmt::{self, Display, Write};

const DELIM: &str = "{}";
const ESCAPE: u8 = b'\\';

/// Substitute `{}` placeholders in `format` with `args`, in order.
///
/// - `\{}` is an escaped placeholder and yields a literal `{}`
/// - `\\{}` yields a literal backslash followed by a substitution
/// - surplus arguments are ignored, surplus placeholders are kept verbatim
///
/// # Example
///
/// ```
/// use semantic_logger::log::format_message;
///
/// assert_eq!(format_message("{} of {}", &[&1, &3]), "1 of 3");
/// assert_eq!(format_message("set \\{} is empty", &[&"x"]), "set {} is empty");
/// ```
pub fn format_message(format: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return format.to_string();
    }

    let bytes = format.as_bytes();
    let mut out = String::with_capacity(format.len() + 16 * args.len());
    let mut pos = 0;
    let mut next_arg = 0;

    while next_arg < args.len() {
        let Some(offset) = format[pos..].find(DELIM) else {
            break;
        };
        let at = pos + offset;

        if is_escaped(bytes, at) {
            if is_escaped(bytes, at - 1) {
                // Escaped backslash: keep one backslash and substitute.
                out.push_str(&format[pos..at - 1]);
                push_arg(&mut out, args[next_arg]);
                next_arg += 1;
                pos = at + DELIM.len();
            } else {
                out.push_str(&format[pos..at - 1]);
                out.push('{');
                pos = at + 1;
            }
        } else {
            out.push_str(&format[pos..at]);
            push_arg(&mut out, args[next_arg]);
            next_arg += 1;
            pos = at + DELIM.len();
        }
    }

    out.push_str(&format[pos..]);
    out
}

fn is_escaped(bytes: &[u8], at: usize) -> bool {
    at >= 1 && bytes[at - 1] == ESCAPE
}

fn push_arg(out: &mut String, arg: &dyn Display) {
    let _ = write!(out, "{}", arg);
}

/// Renders an error together with its chain of sources.
///
/// Each source is printed on its own `Caused by:` line, which is the
/// closest thing to a stack trace a plain error value carries.
pub struct ErrorChain<'a>(pub &'a (dyn Error + 'a));

impl Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, "\nCaused by: {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }
}
