//! Resource handlers for the quotation endpoints.
//!
//! Each handler is a single linear sequence: read the request, call the
//! store, negotiate a format from the Accept header, serialize. The store
//! runs before negotiation, so an unknown id or a validation failure wins
//! over an unsupported Accept header.

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;
use axum::Json;
use quotary_core::{Quotation, QuotationText};
use quotary_render::{Format, DEFAULT_ACCEPT};
use serde::Deserialize;
use tracing::debug;

/// Mobile clients see at most this many records on the list endpoint.
const MOBILE_LIMIT: usize = 3;

/// Query parameters shared by the list and single-record GET endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default, rename = "quotationOnly")]
    pub quotation_only: bool,
}

/// Create/update request body. Fields are optional so an absent field
/// reports a validation error instead of a body-deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct QuotationPayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl QuotationPayload {
    fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClientType {
    Mobile,
    Laptop,
}

/// `GET /quotations`
pub async fn list_quotations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    // Client-type validation comes before negotiation: a bad X-Client-Type
    // is a 400 even when the Accept header is also unsupported.
    let client_type = client_type(&headers)?;
    debug!(?client_type, quotation_only = query.quotation_only, "listing quotations");

    let mut quotations: Vec<Quotation> = {
        let store = state.store.read().await;
        store.list().to_vec()
    };
    if client_type == ClientType::Mobile {
        quotations.truncate(MOBILE_LIMIT);
    }

    let format = negotiated_format(&headers)?;

    let body = if query.quotation_only {
        let projected: Vec<QuotationText> = quotations.iter().map(Into::into).collect();
        format.render_many(&projected)?
    } else {
        format.render_many(&quotations)?
    };
    Ok(negotiated_response(StatusCode::OK, format, body))
}

/// `POST /quotations`
pub async fn create_quotation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<QuotationPayload>,
) -> ApiResult<Response> {
    let created = {
        let mut store = state.store.write().await;
        store.create(payload.text(), payload.author())?
    };
    debug!(id = created.id, "created quotation");

    let format = negotiated_format(&headers)?;
    let body = format.render_one(&created)?;
    Ok(negotiated_response(StatusCode::CREATED, format, body))
}

/// `GET /quotations/{id}`
pub async fn get_quotation(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<ListQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let quotation = {
        let store = state.store.read().await;
        store.get(id)?.clone()
    };

    let format = negotiated_format(&headers)?;
    let body = if query.quotation_only {
        format.render_one(&QuotationText::from(&quotation))?
    } else {
        format.render_one(&quotation)?
    };
    Ok(negotiated_response(StatusCode::OK, format, body))
}

/// `PUT /quotations/{id}`
pub async fn update_quotation(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(payload): Json<QuotationPayload>,
) -> ApiResult<Response> {
    let updated = {
        let mut store = state.store.write().await;
        store.update(id, payload.text(), payload.author())?
    };
    debug!(id = updated.id, "updated quotation");

    let format = negotiated_format(&headers)?;
    let body = format.render_one(&updated)?;
    Ok(negotiated_response(StatusCode::OK, format, body))
}

/// `DELETE /quotations/{id}`
///
/// The deleted record is returned in the response body, not an empty 204.
pub async fn delete_quotation(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let deleted = {
        let mut store = state.store.write().await;
        store.delete(id)?
    };
    debug!(id = deleted.id, "deleted quotation");

    let format = negotiated_format(&headers)?;
    let body = format.render_one(&deleted)?;
    Ok(negotiated_response(StatusCode::OK, format, body))
}

fn client_type(headers: &HeaderMap) -> ApiResult<ClientType> {
    let value = headers
        .get("x-client-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("laptop");

    match value.to_ascii_lowercase().as_str() {
        "mobile" => Ok(ClientType::Mobile),
        "laptop" => Ok(ClientType::Laptop),
        other => Err(ApiError::InvalidClientType(other.to_string())),
    }
}

fn negotiated_format(headers: &HeaderMap) -> ApiResult<Format> {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_ACCEPT);

    Format::negotiate(accept).ok_or_else(|| ApiError::NotAcceptable(accept.to_string()))
}

fn negotiated_response(status: StatusCode, format: Format, body: String) -> Response {
    use axum::response::IntoResponse;

    (
        status,
        [(header::CONTENT_TYPE, format.content_type())],
        body,
    )
        .into_response()
}
