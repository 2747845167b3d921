use super::scanner::Unit;

/// One comma tail anywhere switches the whole input to comma-separated mode.
pub(super) fn is_comma_separated(units: &[Unit<'_>], treat_comma_as_space: bool) -> bool {
    !treat_comma_as_space && units.iter().any(Unit::has_comma_tail)
}

/// Whitespace mode: every unit is its own field.
pub(super) fn space_fields(units: &[Unit<'_>]) -> Vec<String> {
    units.iter().map(|unit| unit.text().to_string()).collect()
}

/// Comma mode: units up to and including the next comma tail form one field.
/// Inner units keep their delimiter text verbatim; the closing unit
/// contributes only its payload.
pub(super) fn comma_fields(units: &[Unit<'_>]) -> Vec<String> {
    let mut fields = Vec::new();
    let mut pending: Vec<&Unit<'_>> = Vec::new();

    for unit in units {
        if unit.has_comma_tail() {
            fields.push(close_field(&pending, unit));
            pending.clear();
        } else {
            pending.push(unit);
        }
    }

    if let Some((last, rest)) = pending.split_last() {
        fields.push(close_field(rest, last));
    }

    fields
}

fn close_field(pending: &[&Unit<'_>], last: &Unit<'_>) -> String {
    let mut field = String::new();
    for unit in pending {
        field.push_str(unit.text());
        field.push_str(unit.tail_text);
    }
    field.push_str(last.text());
    field
}
