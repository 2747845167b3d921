pub mod error;
pub mod options;
pub mod splitter;

pub use error::SplitError;
pub use options::{QuotePolicy, SplitOptions};
pub use splitter::{Payload, Tail, Unit, scan, split_args, split_with, unescape};

/// Reusable splitter bound to one set of options.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    options: SplitOptions,
}

impl Splitter {
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    pub fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        split_with(input, &self.options)
    }

    /// Scans without merging or decoding, under this splitter's quote policy.
    pub fn units<'a>(&self, input: &'a str) -> Result<Vec<Unit<'a>>, SplitError> {
        scan(input, self.options.unterminated_quote)
    }

    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SplitOptions {
        &mut self.options
    }
}
