use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SplitError;

/// What to do with a `"` that cannot open a valid quoted unit, either
/// because it never closes or because its closing quote runs straight into
/// more text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuotePolicy {
    /// Read the text from the quote up to the next whitespace or comma as an
    /// ordinary unquoted unit, quote characters included.
    #[default]
    Literal,
    /// Stop scanning and silently drop the rest of the input.
    Discard,
    /// Fail the whole split with a [`SplitError`].
    Reject,
}

impl QuotePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            QuotePolicy::Literal => "literal",
            QuotePolicy::Discard => "discard",
            QuotePolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for QuotePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuotePolicy {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Ok(QuotePolicy::Literal),
            "discard" => Ok(QuotePolicy::Discard),
            "reject" => Ok(QuotePolicy::Reject),
            other => Err(SplitError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Knobs for a single split call.
///
/// Deserializes from a partial document; missing keys take their defaults:
///
/// ```
/// use argsplit_core::{QuotePolicy, SplitOptions};
///
/// let opts = SplitOptions::default()
///     .with_comma_as_space(true)
///     .with_unterminated_quote(QuotePolicy::Reject);
/// assert!(opts.treat_comma_as_space);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SplitOptions {
    /// Commas separate arguments exactly like whitespace and never switch
    /// the input into comma-separated mode.
    pub treat_comma_as_space: bool,
    pub unterminated_quote: QuotePolicy,
}

impl SplitOptions {
    pub fn with_comma_as_space(mut self, enabled: bool) -> Self {
        self.treat_comma_as_space = enabled;
        self
    }

    pub fn with_unterminated_quote(mut self, policy: QuotePolicy) -> Self {
        self.unterminated_quote = policy;
        self
    }
}
