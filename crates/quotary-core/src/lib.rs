//! Core types for the Quotary service.
//!
//! This crate provides the foundation types used across all Quotary components:
//! - Quotation record and its text-only projection
//! - Record trait for format-agnostic tabular rendering
//! - In-memory quotation store with id assignment
//! - Problem Details error model

pub mod error;
pub mod quotation;
pub mod store;

pub use error::{ProblemDetails, StoreError};
pub use quotation::{Quotation, QuotationText, Record};
pub use store::QuotationStore;
