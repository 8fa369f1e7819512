//! HTTP client for the engage REST backend.
//!
//! Wraps `reqwest` with bearer-token auth, typed envelope deserialization,
//! and per-endpoint error context. Endpoint methods are grouped by resource:
//! the `leads`, `engagements`, and `settings` modules each add an
//! `impl ApiClient` block. No retry and no refresh-on-401 — every failure
//! surfaces to the caller as an [`ApiError`].

mod client;
mod engagements;
mod error;
mod leads;
mod settings;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::Settings;
