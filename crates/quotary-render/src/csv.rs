//! CSV renderer.

use quotary_core::Record;

/// Render a sequence of records as CSV.
///
/// The header row is the record type's field names. Rows are joined with
/// `\n` and there is no trailing newline. An empty sequence renders as the
/// empty string.
pub fn to_csv<R: Record>(records: &[R]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(R::field_names().join(","));
    for record in records {
        let row: Vec<String> = record
            .field_values()
            .iter()
            .map(|v| escape_field(v))
            .collect();
        rows.push(row.join(","));
    }
    rows.join("\n")
}

/// Render a single record as a one-row CSV table.
pub fn record_to_csv<R: Record>(record: &R) -> String {
    to_csv(std::slice::from_ref(record))
}

/// Quote a field iff it contains a comma, double quote, or newline.
/// Inner double quotes are doubled.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotary_core::Quotation;

    fn quote(id: u64, text: &str, author: &str) -> Quotation {
        Quotation {
            id,
            text: text.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn test_plain_fields_are_not_quoted() {
        let csv = to_csv(&[quote(1, "simple", "X")]);
        assert_eq!(csv, "id,text,author\n1,simple,X");
    }

    #[test]
    fn test_comma_forces_quoting() {
        let csv = to_csv(&[quote(1, "a,b", "X")]);
        assert_eq!(csv, "id,text,author\n1,\"a,b\",X");
    }

    #[test]
    fn test_inner_quotes_are_doubled() {
        let csv = to_csv(&[quote(1, "say \"hi\"", "X")]);
        assert_eq!(csv, "id,text,author\n1,\"say \"\"hi\"\"\",X");
    }

    #[test]
    fn test_newline_forces_quoting() {
        let csv = to_csv(&[quote(1, "two\nlines", "X")]);
        assert_eq!(csv, "id,text,author\n1,\"two\nlines\",X");
    }

    #[test]
    fn test_multiple_records_one_row_each() {
        let csv = to_csv(&[quote(1, "a", "A"), quote(2, "b", "B")]);
        assert_eq!(csv, "id,text,author\n1,a,A\n2,b,B");
    }

    #[test]
    fn test_empty_sequence_is_empty_string() {
        let csv = to_csv::<Quotation>(&[]);
        assert_eq!(csv, "");
    }

    #[test]
    fn test_single_record_matches_one_element_sequence() {
        let q = quote(3, "a,b", "X");
        assert_eq!(record_to_csv(&q), to_csv(&[q.clone()]));
    }

    #[test]
    fn test_quoting_round_trips_original_value() {
        let original = "she said, \"go\"";
        let escaped = escape_field(original);
        assert_eq!(escaped, "\"she said, \"\"go\"\"\"");

        let inner = escaped
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap();
        let unescaped = inner.replace("\"\"", "\"");
        assert_eq!(unescaped, original);
    }
}
