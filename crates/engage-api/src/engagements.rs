//! Engagement endpoints: list, detail, replies, and bulk mutations.
//!
//! The engagement collection is served unpaginated, and bulk bodies use the
//! `selectedIds` spelling (the leads endpoints use `id`). The single-entity
//! fetch is the one call site that maps a 404 to a dedicated not-found error.

use engage_core::types::{Engagement, NewEngagement, Reply};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{DataEnvelope, EngagementList};

impl ApiClient {
    /// Fetches the full engagement collection from `GET api/engagements`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Status`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the body does not match
    ///   `{"data": {"engagements": [..]}}`.
    pub async fn list_engagements(&self) -> Result<Vec<Engagement>, ApiError> {
        let path = "api/engagements";
        let response = self.send(path, self.request(Method::GET, path)?).await?;
        let envelope: DataEnvelope<EngagementList> =
            Self::json_body(response, "list_engagements").await?;
        Ok(envelope.data.engagements)
    }

    /// Creates an engagement via `POST api/engagements`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn create_engagement(&self, engagement: &NewEngagement) -> Result<(), ApiError> {
        let path = "api/engagements";
        self.send(path, self.request(Method::POST, path)?.json(engagement))
            .await?;
        Ok(())
    }

    /// Sets `field` to `value` on every engagement in `ids` via
    /// `PATCH api/engagements` with body `{"selectedIds": [..], "<field>": value}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn bulk_patch_engagements(
        &self,
        field: engage_core::types::BulkField,
        value: &str,
        ids: &[String],
    ) -> Result<(), ApiError> {
        let path = "api/engagements";
        let mut body = serde_json::json!({ "selectedIds": ids });
        body[field.as_str()] = serde_json::Value::String(value.to_owned());
        self.send(path, self.request(Method::PATCH, path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Deletes every engagement in `ids` via `DELETE api/engagements` with
    /// body `{"data": {"selectedIds": [..]}}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn bulk_delete_engagements(&self, ids: &[String]) -> Result<(), ApiError> {
        let path = "api/engagements";
        let body = serde_json::json!({ "data": { "selectedIds": ids } });
        self.send(path, self.request(Method::DELETE, path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Fetches one engagement from `GET api/engagements/get/{id}`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] if the backend answers 404.
    /// - [`ApiError::Http`], [`ApiError::Status`], or [`ApiError::Deserialize`]
    ///   otherwise.
    pub async fn get_engagement(&self, id: &str) -> Result<Engagement, ApiError> {
        let path = format!("api/engagements/get/{id}");
        let result = self.send(&path, self.request(Method::GET, &path)?).await;
        let response = match result {
            Err(ApiError::Status { status: 404, .. }) => {
                return Err(ApiError::NotFound { id: id.to_owned() })
            }
            other => other?,
        };
        let envelope: DataEnvelope<Engagement> =
            Self::json_body(response, &format!("get_engagement({id})")).await?;
        Ok(envelope.data)
    }

    /// Fetches the message history from `GET api/engagements/{id}/replies`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`], [`ApiError::Status`], or [`ApiError::Deserialize`]
    /// on failure.
    pub async fn list_replies(&self, id: &str) -> Result<Vec<Reply>, ApiError> {
        let path = format!("api/engagements/{id}/replies");
        let response = self.send(&path, self.request(Method::GET, &path)?).await?;
        let envelope: DataEnvelope<Vec<Reply>> =
            Self::json_body(response, &format!("list_replies({id})")).await?;
        Ok(envelope.data)
    }

    /// Reassigns a single engagement's category via
    /// `POST api/engagements/{id}` with body `{"category": value}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn update_engagement_category(
        &self,
        id: &str,
        category: &str,
    ) -> Result<(), ApiError> {
        let path = format!("api/engagements/{id}");
        let body = serde_json::json!({ "category": category });
        self.send(&path, self.request(Method::POST, &path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Deletes one engagement via `DELETE api/engagements/{id}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn delete_engagement(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("api/engagements/{id}");
        self.send(&path, self.request(Method::DELETE, &path)?)
            .await?;
        Ok(())
    }

    /// Total message count across engagements, from
    /// `GET api/engagements/messageCount`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`], [`ApiError::Status`], or [`ApiError::Deserialize`]
    /// on failure.
    pub async fn message_count(&self) -> Result<u64, ApiError> {
        let path = "api/engagements/messageCount";
        let response = self.send(path, self.request(Method::GET, path)?).await?;
        let envelope: DataEnvelope<u64> = Self::json_body(response, "message_count").await?;
        Ok(envelope.data)
    }
}
