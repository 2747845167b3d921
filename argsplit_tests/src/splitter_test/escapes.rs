use super::*;

#[test]
fn escaped_backslashes_collapse() {
    assert_eq!(
        split_args(r#""path\\to\\file""#, false),
        strings(&[r"path\to\file"])
    );
}

#[test]
fn even_backslashes_before_quote_close_it() {
    assert_eq!(
        split_args(r#""ends with \\" x"#, false),
        strings(&[r"ends with \", "x"])
    );
}

#[test]
fn escaped_quotes_around_a_word() {
    assert_eq!(split_args(r#""say \"hi\"""#, false), strings(&[r#"say "hi""#]));
}

#[test]
fn odd_backslashes_before_quote_escape_it() {
    assert_eq!(split_args(r#""x\\\"y""#, false), strings(&[r#"x\"y"#]));
}

#[test]
fn escapes_outside_quotes_are_decoded() {
    assert_eq!(split_args(r#"a\"b c\\d"#, false), strings(&[r#"a"b"#, r"c\d"]));
}

#[test]
fn unknown_escapes_are_kept() {
    assert_eq!(split_args(r#""a\nb""#, false), strings(&[r"a\nb"]));
}

#[test]
fn escapes_in_merged_comma_field() {
    assert_eq!(
        split_args(r#"a \"b\", c"#, false),
        strings(&[r#"a "b""#, "c"])
    );
}
