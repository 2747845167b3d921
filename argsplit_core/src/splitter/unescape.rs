/// Decodes `\"` to `"` and `\\` to `\` in a single forward pass. Any other
/// backslash is kept as-is.
///
/// ```
/// use argsplit_core::unescape;
///
/// assert_eq!(unescape(r#"say \"hi\""#), r#"say "hi""#);
/// assert_eq!(unescape(r"C:\\temp\n"), r"C:\temp\n");
/// ```
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut it = raw.chars().peekable();

    while let Some(ch) = it.next() {
        if ch == '\\' {
            match it.peek().copied() {
                Some(next @ ('"' | '\\')) => {
                    it.next();
                    out.push(next);
                    continue;
                }
                _ => {}
            }
        }
        out.push(ch);
    }

    out
}
