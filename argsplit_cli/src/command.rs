use argsplit_core::{QuotePolicy, split_args};

/// A line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand<'a> {
    Help,
    Exit,
    Show,
    SetCommaAsSpace(bool),
    SetQuotePolicy(QuotePolicy),
    Units(&'a str),
    Split(&'a str),
}

pub fn parse_line(input: &str) -> Result<ReplCommand<'_>, String> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
        return Ok(ReplCommand::Exit);
    }
    if input.eq_ignore_ascii_case("help") {
        return Ok(ReplCommand::Help);
    }
    if input.eq_ignore_ascii_case("show") {
        return Ok(ReplCommand::Show);
    }
    if let Some(rest) = input.strip_prefix("units ") {
        return Ok(ReplCommand::Units(rest));
    }
    if let Some(rest) = input.strip_prefix("set ") {
        return parse_set(rest);
    }

    Ok(ReplCommand::Split(input))
}

fn parse_set(rest: &str) -> Result<ReplCommand<'static>, String> {
    // set <key> <value>
    let tokens = split_args(rest, true);
    if tokens.len() != 2 {
        return Err("Usage: set comma-as-space on|off | set unterminated-quote <policy>".to_string());
    }

    match tokens[0].to_lowercase().as_str() {
        "comma-as-space" => Ok(ReplCommand::SetCommaAsSpace(parse_switch(&tokens[1])?)),
        "unterminated-quote" => tokens[1]
            .parse::<QuotePolicy>()
            .map(ReplCommand::SetQuotePolicy)
            .map_err(|e| e.to_string()),
        other => Err(format!("Unknown setting '{other}'")),
    }
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(format!("Expected on|off, got '{other}'")),
    }
}
