//! Response renderers for the Quotary service.
//!
//! Each supported media type has its own renderer module:
//! - **csv**: comma-separated values with minimal quoting
//! - **html**: escaped `<table>` markup
//! - **xml**: `<items>`/`<item>` element trees
//! - **yaml**: block-style YAML via serde_yaml
//! - **json**: compact JSON via serde_json
//!
//! [`Format`] ties them together and performs Accept-header negotiation.

pub mod csv;
pub mod html;
pub mod json;
pub mod negotiate;
pub mod xml;
pub mod yaml;

pub use negotiate::{Format, DEFAULT_ACCEPT};

/// Errors produced while rendering a response body.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
