//! Shell-like argument splitting.
//!
//! Input is scanned into [`Unit`]s, a delimiter mode is chosen for the whole
//! input, units are merged into fields and finally escapes are decoded.

mod merge;
mod scanner;
mod unescape;

pub use scanner::{Payload, Tail, Unit, scan};
pub use unescape::unescape;

use crate::error::SplitError;
use crate::options::SplitOptions;

/// Splits `args` into arguments.
///
/// Arguments are separated by whitespace, unless `args` contains a comma
/// outside of quotes and `treat_comma_as_space` is off, in which case
/// commas separate arguments and whitespace is kept inside them. Quotes
/// group text, `\"` and `\\` are decoded.
///
/// ```
/// use argsplit_core::split_args;
///
/// assert_eq!(split_args("A B C D", false), ["A", "B", "C", "D"]);
/// assert_eq!(split_args("A B, C D", false), ["A B", "C D"]);
/// assert_eq!(split_args("A B, C D", true), ["A", "B", "C", "D"]);
/// assert_eq!(split_args(r#"A "B C" D"#, false), ["A", "B C", "D"]);
/// assert_eq!(split_args(r#"A "B\"C" D"#, false), ["A", "B\"C", "D"]);
/// ```
pub fn split_args(args: &str, treat_comma_as_space: bool) -> Vec<String> {
    let options = SplitOptions::default().with_comma_as_space(treat_comma_as_space);
    // The literal quote policy never fails.
    split_with(args, &options).unwrap_or_default()
}

pub fn split_with(input: &str, options: &SplitOptions) -> Result<Vec<String>, SplitError> {
    let units = scan(input, options.unterminated_quote)?;
    let comma_separated = merge::is_comma_separated(&units, options.treat_comma_as_space);
    tracing::debug!(units = units.len(), comma_separated, "splitting arguments");

    let fields = if comma_separated {
        merge::comma_fields(&units)
    } else {
        merge::space_fields(&units)
    };

    Ok(fields.iter().map(|field| unescape(field)).collect())
}
