//! HTML table renderer.

use quotary_core::Record;

/// Render a sequence of records as a `<table>` with one header row of
/// `<th>` cells followed by one `<tr>` of `<td>` cells per record.
pub fn to_table<R: Record>(records: &[R]) -> String {
    let mut out = String::from("<table>");
    out.push_str("<tr>");
    for name in R::field_names() {
        out.push_str(&format!("<th>{}</th>", escape(name)));
    }
    out.push_str("</tr>");
    for record in records {
        out.push_str("<tr>");
        for value in record.field_values() {
            out.push_str(&format!("<td>{}</td>", escape(&value)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    out
}

/// Render a single record as a `<table>` of `<tr><th>key</th><td>value</td></tr>` rows.
pub fn record_to_table<R: Record>(record: &R) -> String {
    let mut out = String::from("<table>");
    for (name, value) in R::field_names().iter().zip(record.field_values()) {
        out.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>",
            escape(name),
            escape(&value)
        ));
    }
    out.push_str("</table>");
    out
}

/// Escape `& < > " '` for use in HTML text content.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotary_core::{Quotation, QuotationText};

    #[test]
    fn test_sequence_renders_header_then_rows() {
        let records = vec![
            Quotation {
                id: 1,
                text: "a".to_string(),
                author: "A".to_string(),
            },
            Quotation {
                id: 2,
                text: "b".to_string(),
                author: "B".to_string(),
            },
        ];

        let html = to_table(&records);
        assert_eq!(
            html,
            "<table><tr><th>id</th><th>text</th><th>author</th></tr>\
             <tr><td>1</td><td>a</td><td>A</td></tr>\
             <tr><td>2</td><td>b</td><td>B</td></tr></table>"
        );
    }

    #[test]
    fn test_single_record_renders_key_value_rows() {
        let q = Quotation {
            id: 1,
            text: "a".to_string(),
            author: "A".to_string(),
        };

        let html = record_to_table(&q);
        assert_eq!(
            html,
            "<table><tr><th>id</th><td>1</td></tr>\
             <tr><th>text</th><td>a</td></tr>\
             <tr><th>author</th><td>A</td></tr></table>"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let q = QuotationText {
            text: "<b>\"fish & chips\"</b>".to_string(),
        };

        let html = record_to_table(&q);
        assert!(html.contains(
            "&lt;b&gt;&quot;fish &amp; chips&quot;&lt;/b&gt;"
        ));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_escape_covers_all_five_characters() {
        assert_eq!(escape("&<>\"'"), "&amp;&lt;&gt;&quot;&#x27;");
        assert_eq!(escape("plain"), "plain");
    }
}
