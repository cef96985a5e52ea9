//! Quotation record and its projections.

use serde::{Deserialize, Serialize};

/// A single quotation record.
///
/// Field order (id, text, author) is the serialization order for every
/// output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: u64,
    pub text: String,
    pub author: String,
}

/// Text-only projection of a [`Quotation`].
///
/// Used when a client asks for `quotationOnly`; the other fields are
/// excluded from the record, not blanked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationText {
    pub text: String,
}

impl From<&Quotation> for QuotationText {
    fn from(q: &Quotation) -> Self {
        Self {
            text: q.text.clone(),
        }
    }
}

/// A record with a fixed, ordered set of named fields.
///
/// The tabular renderers (CSV, HTML, XML) are generic over this trait so
/// they work uniformly on full quotations and on projections.
pub trait Record: Serialize {
    /// Ordered field names, shared by every value of the type.
    fn field_names() -> &'static [&'static str];

    /// Field values as strings, in [`field_names`](Record::field_names) order.
    fn field_values(&self) -> Vec<String>;
}

impl Record for Quotation {
    fn field_names() -> &'static [&'static str] {
        &["id", "text", "author"]
    }

    fn field_values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.text.clone(), self.author.clone()]
    }
}

impl Record for QuotationText {
    fn field_names() -> &'static [&'static str] {
        &["text"]
    }

    fn field_values(&self) -> Vec<String> {
        vec![self.text.clone()]
    }
}
