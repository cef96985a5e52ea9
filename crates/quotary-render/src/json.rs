//! JSON renderer.

use crate::RenderError;
use serde::Serialize;

/// Render any serializable value as compact JSON.
///
/// Struct field order is preserved, so quotations serialize as
/// `{"id":..,"text":..,"author":..}`.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?)
}
