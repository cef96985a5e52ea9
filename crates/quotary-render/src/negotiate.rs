//! Accept-header content negotiation.
//!
//! Negotiation is deliberately a substring-containment test in a fixed
//! priority order, not quality-weighted RFC 7231 matching. The first
//! supported media type found in the header value wins. This simplified
//! behavior is an observable contract of the service.

use crate::{csv, html, json, xml, yaml, RenderError};
use quotary_core::Record;

/// Accept value assumed when the client sends no header.
pub const DEFAULT_ACCEPT: &str = "application/json";

/// A negotiated response format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Xml,
    Html,
    Yaml,
    Json,
}

impl Format {
    /// Select a format from a raw Accept header value.
    ///
    /// Checked in declared priority order; `*/*` maps to JSON. Returns
    /// `None` when no supported media type is present.
    pub fn negotiate(accept: &str) -> Option<Format> {
        if accept.contains("text/csv") {
            Some(Format::Csv)
        } else if accept.contains("application/xml") {
            Some(Format::Xml)
        } else if accept.contains("text/html") {
            Some(Format::Html)
        } else if accept.contains("application/x-yaml") {
            Some(Format::Yaml)
        } else if accept.contains("application/json") || accept.contains("*/*") {
            Some(Format::Json)
        } else {
            None
        }
    }

    /// Response `Content-Type` for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Csv => "text/csv",
            Format::Xml => "application/xml",
            Format::Html => "text/html",
            Format::Yaml => "application/x-yaml",
            Format::Json => "application/json",
        }
    }

    /// Render a single record.
    pub fn render_one<R: Record>(&self, record: &R) -> Result<String, RenderError> {
        match self {
            Format::Csv => Ok(csv::record_to_csv(record)),
            Format::Xml => Ok(xml::record_to_element(record)),
            Format::Html => Ok(html::record_to_table(record)),
            Format::Yaml => yaml::to_yaml(record),
            Format::Json => json::to_json(record),
        }
    }

    /// Render an ordered sequence of records.
    pub fn render_many<R: Record>(&self, records: &[R]) -> Result<String, RenderError> {
        match self {
            Format::Csv => Ok(csv::to_csv(records)),
            Format::Xml => Ok(xml::to_document(records)),
            Format::Html => Ok(html::to_table(records)),
            Format::Yaml => yaml::to_yaml(&records),
            Format::Json => json::to_json(&records),
        }
    }
}
