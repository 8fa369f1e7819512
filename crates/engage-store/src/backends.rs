//! `ApiClient`-backed implementations of the store seams.
//!
//! One thin wrapper per resource. Leads are served paginated; engagements
//! come back as a single unpaginated collection, so the engagement backend
//! answers only page 1 and returns an empty page for anything later, which
//! terminates the pager.

use engage_api::{ApiClient, ApiError};
use engage_core::types::{BulkField, Engagement, Lead, NewEngagement, NewLead};

use crate::metadata::MetadataBackend;
use crate::store::{Entity, ListBackend};

impl Entity for Lead {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Engagement {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Lead resource over `api/lead`.
#[derive(Clone)]
pub struct LeadBackend {
    client: ApiClient,
}

impl LeadBackend {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        LeadBackend { client }
    }
}

impl ListBackend<Lead> for LeadBackend {
    type NewItem = NewLead;

    fn resource(&self) -> &'static str {
        "leads"
    }

    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Vec<Lead>, ApiError> {
        self.client.list_leads(page, limit).await
    }

    async fn create(&self, item: &NewLead) -> Result<(), ApiError> {
        self.client.create_lead(item).await
    }

    async fn bulk_update(
        &self,
        field: BulkField,
        value: &str,
        ids: &[String],
    ) -> Result<(), ApiError> {
        self.client.bulk_update_leads(field, value, ids).await
    }

    async fn bulk_delete(&self, ids: &[String]) -> Result<(), ApiError> {
        self.client.bulk_delete_leads(ids).await
    }
}

/// Engagement resource over `api/engagements`.
#[derive(Clone)]
pub struct EngagementBackend {
    client: ApiClient,
}

impl EngagementBackend {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        EngagementBackend { client }
    }
}

impl ListBackend<Engagement> for EngagementBackend {
    type NewItem = NewEngagement;

    fn resource(&self) -> &'static str {
        "engagements"
    }

    async fn fetch_page(&self, page: u32, _limit: u32) -> Result<Vec<Engagement>, ApiError> {
        // The backend serves the whole collection at once.
        if page > 1 {
            return Ok(Vec::new());
        }
        self.client.list_engagements().await
    }

    async fn create(&self, item: &NewEngagement) -> Result<(), ApiError> {
        self.client.create_engagement(item).await
    }

    async fn bulk_update(
        &self,
        field: BulkField,
        value: &str,
        ids: &[String],
    ) -> Result<(), ApiError> {
        self.client.bulk_patch_engagements(field, value, ids).await
    }

    async fn bulk_delete(&self, ids: &[String]) -> Result<(), ApiError> {
        self.client.bulk_delete_engagements(ids).await
    }
}

/// Metadata lists over the settings and engagement endpoints.
#[derive(Clone)]
pub struct MetadataApi {
    client: ApiClient,
}

impl MetadataApi {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        MetadataApi { client }
    }
}

impl MetadataBackend for MetadataApi {
    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        self.client.get_categories().await
    }

    async fn statuses(&self) -> Result<Vec<String>, ApiError> {
        self.client.get_statuses().await
    }

    async fn message_count(&self) -> Result<u64, ApiError> {
        self.client.message_count().await
    }
}
