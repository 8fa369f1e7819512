//! Envelope types for engage REST responses.
//!
//! The backend wraps most payloads in a `{"data": ...}` envelope; the
//! engagement list nests a second level (`{"data": {"engagements": [...]}}`).
//! Settings endpoints return their lists at the top level.

use engage_core::types::{BusinessProfile, Engagement};
use serde::Deserialize;

/// The common `{"data": ...}` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Inner payload of the engagement list: `{"engagements": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct EngagementList {
    pub engagements: Vec<Engagement>,
}

/// Top-level shape of `GET api/settings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub business_profile: BusinessProfile,
}

/// Shape of `GET api/settings/categories`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Shape of `GET api/settings/statuses`.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusesResponse {
    pub statuses: Vec<String>,
}
