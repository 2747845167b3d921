use std::fs;

use anyhow::Context;
use argsplit_core::SplitOptions;

use crate::Args;

/// Builds the options for this run. A `--config` file is read first and
/// command-line flags override it.
pub fn load_options(args: &Args) -> anyhow::Result<SplitOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            serde_json::from_str::<SplitOptions>(&text)
                .with_context(|| format!("invalid config file {}", path.display()))?
        }
        None => SplitOptions::default(),
    };

    if args.comma_as_space {
        options.treat_comma_as_space = true;
    }
    if let Some(policy) = args.unterminated_quote {
        options.unterminated_quote = policy;
    }

    tracing::debug!(?options, "loaded split options");
    Ok(options)
}
