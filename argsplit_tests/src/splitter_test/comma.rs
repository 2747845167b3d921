use super::*;

#[test]
fn plain_commas() {
    assert_eq!(split_args("a,b,c", false), strings(&["a", "b", "c"]));
}

#[test]
fn whitespace_around_commas_is_trimmed() {
    assert_eq!(split_args("a , b ,c", false), strings(&["a", "b", "c"]));
}

#[test]
fn full_width_comma_separates() {
    assert_eq!(split_args("A，B C", false), strings(&["A", "B C"]));
    assert_eq!(split_args("A，B C", true), strings(&["A", "B", "C"]));
}

#[test]
fn inner_whitespace_is_kept_verbatim() {
    assert_eq!(split_args("A   B, C", false), strings(&["A   B", "C"]));
    assert_eq!(split_args("A\tB, C", false), strings(&["A\tB", "C"]));
}

#[test]
fn empty_fields_are_skipped() {
    assert_eq!(split_args("a,,b", false), strings(&["a", "b"]));
    assert_eq!(split_args(",a b, c", false), strings(&["a b", "c"]));
    assert_eq!(split_args("a, b,", false), strings(&["a", "b"]));
}

#[test]
fn trailing_whitespace_is_dropped_from_last_field() {
    assert_eq!(split_args("a, b c  ", false), strings(&["a", "b c"]));
}

#[test]
fn leading_whitespace_is_not_part_of_first_field() {
    assert_eq!(split_args("  a b, c", false), strings(&["a b", "c"]));
}

#[test]
fn one_comma_switches_the_whole_input() {
    assert_eq!(
        split_args("one two three four, five", false),
        strings(&["one two three four", "five"])
    );
}

#[test]
fn quoted_unit_inside_a_field_loses_its_quotes() {
    assert_eq!(split_args(r#"x "y z", w"#, false), strings(&["x y z", "w"]));
    assert_eq!(split_args(r#"a, b "c d""#, false), strings(&["a", "b c d"]));
}

#[test]
fn lone_quoted_fields() {
    assert_eq!(split_args(r#"a, "b, c""#, false), strings(&["a", "b, c"]));
    assert_eq!(split_args(r#""a",b"#, false), strings(&["a", "b"]));
}

#[test]
fn comma_inside_quotes_does_not_enable_comma_mode() {
    assert_eq!(split_args(r#""a,b" c"#, false), strings(&["a,b", "c"]));
}
