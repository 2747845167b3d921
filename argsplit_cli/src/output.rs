use argsplit_core::{SplitOptions, Tail, Unit};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct UnitView<'a> {
    start: usize,
    end: usize,
    quoted: bool,
    text: &'a str,
    tail: &'static str,
}

impl<'a> From<&Unit<'a>> for UnitView<'a> {
    fn from(unit: &Unit<'a>) -> Self {
        Self {
            start: unit.span.start,
            end: unit.span.end,
            quoted: unit.is_quoted(),
            text: unit.text(),
            tail: match unit.tail {
                Tail::End => "end",
                Tail::Comma => "comma",
                Tail::Space => "space",
            },
        }
    }
}

pub fn print_fields(fields: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(fields)?);
        return Ok(());
    }
    for (i, field) in fields.iter().enumerate() {
        println!("{i}\t{field:?}");
    }
    Ok(())
}

pub fn print_units(units: &[Unit<'_>], json: bool) -> anyhow::Result<()> {
    let views: Vec<UnitView<'_>> = units.iter().map(UnitView::from).collect();
    if json {
        println!("{}", serde_json::to_string(&views)?);
        return Ok(());
    }
    for view in views {
        let kind = if view.quoted { "quoted" } else { "unquoted" };
        println!(
            "{}..{}\t{kind}\t{:?}\t{}",
            view.start, view.end, view.text, view.tail
        );
    }
    Ok(())
}

pub fn print_options(options: &SplitOptions) {
    println!("comma-as-space      {}", options.treat_comma_as_space);
    println!("unterminated-quote  {}", options.unterminated_quote);
}

pub fn print_help() {
    println!("Commands:");
    println!("  <text>                          -> split text and print the fields");
    println!("  units <text>                    -> show scanned units (debug)");
    println!("  set comma-as-space on|off       -> treat commas as plain separators");
    println!("  set unterminated-quote <policy> -> literal|discard|reject");
    println!("  show                            -> show current options");
    println!("  exit|quit                       -> quit");
    println!("  help                            -> help");
}
