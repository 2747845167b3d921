use super::*;

fn with_policy(policy: QuotePolicy) -> SplitOptions {
    SplitOptions::default().with_unterminated_quote(policy)
}

#[test]
fn discard_drops_everything_after_unclosed_quote() -> anyhow::Result<()> {
    let opts = with_policy(QuotePolicy::Discard);
    assert_eq!(split_with(r#"a "b c"#, &opts)?, strings(&["a"]));
    // the comma is never reached, so whitespace mode applies
    assert_eq!(
        split_with(r#"a b "unterminated, d"#, &opts)?,
        strings(&["a", "b"])
    );
    Ok(())
}

#[test]
fn discard_drops_text_glued_to_closing_quote() -> anyhow::Result<()> {
    let opts = with_policy(QuotePolicy::Discard);
    assert_eq!(split_with(r#"x "y"z w"#, &opts)?, strings(&["x"]));
    Ok(())
}

#[test]
fn reject_reports_unclosed_quote() {
    let err = split_with(r#"a "b c"#, &with_policy(QuotePolicy::Reject)).unwrap_err();
    assert_eq!(err, SplitError::UnclosedQuote { offset: 2 });
    assert_eq!(err.offset(), Some(2));
    assert!(err.to_string().to_lowercase().contains("unclosed quote"));
}

#[test]
fn reject_reports_text_after_closing_quote() {
    let err = split_with(r#""ram"kumar"#, &with_policy(QuotePolicy::Reject)).unwrap_err();
    assert_eq!(err, SplitError::TextAfterClosingQuote { offset: 4 });
    assert!(err.to_string().to_lowercase().contains("after the closing quote"));
}

#[test]
fn reject_accepts_well_formed_input() -> anyhow::Result<()> {
    let opts = with_policy(QuotePolicy::Reject);
    assert_eq!(
        split_with(r#"a "b c" d, e"#, &opts)?,
        strings(&["a b c d", "e"])
    );
    assert_eq!(split_with(r#"ab"cd""#, &opts)?, strings(&[r#"ab"cd""#]));
    Ok(())
}

#[test]
fn literal_is_the_default() -> anyhow::Result<()> {
    assert_eq!(SplitOptions::default().unterminated_quote, QuotePolicy::Literal);
    assert_eq!(
        split_with(r#""A"B C"#, &SplitOptions::default())?,
        strings(&[r#""A"B"#, "C"])
    );
    Ok(())
}
