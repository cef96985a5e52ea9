//! XML renderer.

use quotary_core::Record;

/// Render a sequence of records as an `<items>` document with one
/// `<item>` child per record.
pub fn to_document<R: Record>(records: &[R]) -> String {
    let mut out = String::from("<items>");
    for record in records {
        out.push_str(&element(record));
    }
    out.push_str("</items>");
    out
}

/// Render a single record as an `<item>` root element.
pub fn record_to_element<R: Record>(record: &R) -> String {
    element(record)
}

fn element<R: Record>(record: &R) -> String {
    let mut out = String::from("<item>");
    for (name, value) in R::field_names().iter().zip(record.field_values()) {
        out.push_str(&format!("<{name}>{}</{name}>", escape_text(&value)));
    }
    out.push_str("</item>");
    out
}

/// Standard XML text escaping: `& < >`.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
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
    fn test_sequence_nests_items_under_root() {
        let xml = to_document(&[quote(1, "a", "A"), quote(2, "b", "B")]);
        assert_eq!(
            xml,
            "<items><item><id>1</id><text>a</text><author>A</author></item>\
             <item><id>2</id><text>b</text><author>B</author></item></items>"
        );
    }

    #[test]
    fn test_single_record_is_item_root() {
        let xml = record_to_element(&quote(1, "a", "A"));
        assert_eq!(xml, "<item><id>1</id><text>a</text><author>A</author></item>");
    }

    #[test]
    fn test_empty_sequence_is_bare_root() {
        let xml = to_document::<Quotation>(&[]);
        assert_eq!(xml, "<items></items>");
    }

    #[test]
    fn test_text_content_is_escaped() {
        let xml = record_to_element(&quote(1, "a < b & c > d", "X"));
        assert!(xml.contains("<text>a &lt; b &amp; c &gt; d</text>"));
    }

    #[test]
    fn test_escaped_element_parses_back_to_original_values() {
        fn unescape_text(s: &str) -> String {
            s.replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&amp;", "&")
        }

        let original = quote(3, "a < b & c > d", "Tom & Jerry");
        let xml = record_to_element(&original);

        let field = |name: &str| -> String {
            let open = format!("<{name}>");
            let close = format!("</{name}>");
            let start = xml.find(&open).unwrap() + open.len();
            let end = xml.find(&close).unwrap();
            unescape_text(&xml[start..end])
        };

        assert_eq!(field("id"), original.id.to_string());
        assert_eq!(field("text"), original.text);
        assert_eq!(field("author"), original.author);
    }
}
