mod command;
mod config;
mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use argsplit_core::{QuotePolicy, Splitter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use command::{ReplCommand, parse_line};

#[derive(Debug, Parser)]
#[command(name = "argsplit", version, about = "Split text into shell-like arguments")]
pub struct Args {
    /// Text to split. Starts an interactive prompt when omitted.
    input: Option<String>,

    /// Treat commas as plain separators, never as field delimiters
    #[arg(long)]
    comma_as_space: bool,

    /// How to handle a quote that never closes: literal, discard or reject
    #[arg(long, value_name = "POLICY")]
    unterminated_quote: Option<QuotePolicy>,

    /// JSON file holding split options; flags take precedence
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut splitter = Splitter::new(config::load_options(&args)?);

    if let Some(input) = &args.input {
        let fields = splitter.split(input)?;
        return output::print_fields(&fields, args.json);
    }

    repl(&mut splitter, args.json)
}

fn repl(splitter: &mut Splitter, json: bool) -> anyhow::Result<()> {
    println!("argsplit (type 'help' or 'exit')");

    loop {
        print!("argsplit> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        let cmd = match parse_line(&line) {
            Ok(cmd) => cmd,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match cmd {
            ReplCommand::Exit => break,
            ReplCommand::Help => output::print_help(),
            ReplCommand::Show => output::print_options(splitter.options()),
            ReplCommand::SetCommaAsSpace(enabled) => {
                splitter.options_mut().treat_comma_as_space = enabled;
            }
            ReplCommand::SetQuotePolicy(policy) => {
                splitter.options_mut().unterminated_quote = policy;
            }
            ReplCommand::Units(text) => match splitter.units(text) {
                Ok(units) => output::print_units(&units, json)?,
                Err(err) => eprintln!("Split error: {err}"),
            },
            ReplCommand::Split(text) => match splitter.split(text) {
                Ok(fields) => output::print_fields(&fields, json)?,
                Err(err) => eprintln!("Split error: {err}"),
            },
        }
    }

    Ok(())
}
