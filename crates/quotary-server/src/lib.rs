//! HTTP surface for the Quotary service.
//!
//! Exposes a content-negotiating CRUD API over a single in-memory
//! collection of quotation records:
//! - `GET /quotations` with `quotationOnly` projection and client-type filtering
//! - `POST /quotations`
//! - `GET /quotations/{id}`
//! - `PUT /quotations/{id}`
//! - `DELETE /quotations/{id}`
//!
//! Responses are rendered as JSON, CSV, XML, HTML, or YAML depending on the
//! Accept header; errors come back as RFC 7807 Problem Details.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ApiResult};

use axum::routing::get;
use axum::Router;
use quotary_core::QuotationStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Shared handler state.
///
/// The store is owned here and injected into handlers; there is no
/// process-wide singleton. The lock covers one store operation at a time
/// and gives no cross-request transactional guarantees.
#[derive(Clone)]
pub struct AppState {
    pub(crate) store: Arc<RwLock<QuotationStore>>,
}

/// Build the service router around the given store.
pub fn app(store: QuotationStore) -> Router {
    let state = AppState {
        store: Arc::new(RwLock::new(store)),
    };

    Router::new()
        .route(
            "/quotations",
            get(handlers::list_quotations).post(handlers::create_quotation),
        )
        .route(
            "/quotations/:id",
            get(handlers::get_quotation)
                .put(handlers::update_quotation)
                .delete(handlers::delete_quotation),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
