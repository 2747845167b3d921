use thiserror::Error;

/// Errors surfaced by the splitter. Only produced under
/// [`QuotePolicy::Reject`](crate::QuotePolicy::Reject) or when parsing a
/// policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("Unclosed quote (\") starting at byte {offset}")]
    UnclosedQuote { offset: usize },

    #[error(
        "Characters found immediately after the closing quote at byte {offset}. Add whitespace or a comma after the quoted text."
    )]
    TextAfterClosingQuote { offset: usize },

    #[error("Unknown quote policy '{0}'. Use literal|discard|reject")]
    UnknownPolicy(String),
}

impl SplitError {
    /// Byte offset of the offending quote, if the error points into the input.
    pub fn offset(&self) -> Option<usize> {
        match self {
            SplitError::UnclosedQuote { offset } | SplitError::TextAfterClosingQuote { offset } => {
                Some(*offset)
            }
            SplitError::UnknownPolicy(_) => None,
        }
    }
}
