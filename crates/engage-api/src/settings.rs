//! Settings endpoints: metadata lists, business profile, and the chatbot
//! system prompt.
//!
//! Renaming or deleting a category/status does not cascade to leads or
//! engagements already carrying the old value; the backend offers no
//! referential integrity here and neither does this client.

use engage_core::types::{BusinessProfile, SettingKind};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{CategoriesResponse, Settings, StatusesResponse};

impl ApiClient {
    /// Fetches categories, statuses, and the business profile from
    /// `GET api/settings`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`], [`ApiError::Status`], or [`ApiError::Deserialize`]
    /// on failure.
    pub async fn get_settings(&self) -> Result<Settings, ApiError> {
        let path = "api/settings";
        let response = self.send(path, self.request(Method::GET, path)?).await?;
        Self::json_body(response, "get_settings").await
    }

    /// Fetches just the category list from `GET api/settings/categories`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`], [`ApiError::Status`], or [`ApiError::Deserialize`]
    /// on failure.
    pub async fn get_categories(&self) -> Result<Vec<String>, ApiError> {
        let path = "api/settings/categories";
        let response = self.send(path, self.request(Method::GET, path)?).await?;
        let body: CategoriesResponse = Self::json_body(response, "get_categories").await?;
        Ok(body.categories)
    }

    /// Fetches just the status list from `GET api/settings/statuses`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`], [`ApiError::Status`], or [`ApiError::Deserialize`]
    /// on failure.
    pub async fn get_statuses(&self) -> Result<Vec<String>, ApiError> {
        let path = "api/settings/statuses";
        let response = self.send(path, self.request(Method::GET, path)?).await?;
        let body: StatusesResponse = Self::json_body(response, "get_statuses").await?;
        Ok(body.statuses)
    }

    /// Adds a category or status via `POST api/settings/{kind}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn add_setting(&self, kind: SettingKind, name: &str) -> Result<(), ApiError> {
        let path = format!("api/settings/{}", kind.path_segment());
        let body = serde_json::json!({ "name": name });
        self.send(&path, self.request(Method::POST, &path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Renames a category or status via `PUT api/settings/{kind}` with an
    /// old-name/new-name pair.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn rename_setting(
        &self,
        kind: SettingKind,
        name: &str,
        new_name: &str,
    ) -> Result<(), ApiError> {
        let path = format!("api/settings/{}", kind.path_segment());
        let body = serde_json::json!({ "name": name, "newName": new_name });
        self.send(&path, self.request(Method::PUT, &path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Deletes a category or status via `DELETE api/settings/{kind}` with
    /// `{"name": ..}` in the body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn delete_setting(&self, kind: SettingKind, name: &str) -> Result<(), ApiError> {
        let path = format!("api/settings/{}", kind.path_segment());
        let body = serde_json::json!({ "name": name });
        self.send(&path, self.request(Method::DELETE, &path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Updates the business profile via `PUT api/settings/profile`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn update_profile(&self, profile: &BusinessProfile) -> Result<(), ApiError> {
        let path = "api/settings/profile";
        self.send(path, self.request(Method::PUT, path)?.json(profile))
            .await?;
        Ok(())
    }

    /// Fetches the chatbot system prompt from `GET api/chatbot/prompt`.
    ///
    /// The backend returns the prompt as a bare JSON string.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`], [`ApiError::Status`], or [`ApiError::Deserialize`]
    /// on failure.
    pub async fn chatbot_prompt(&self) -> Result<String, ApiError> {
        let path = "api/chatbot/prompt";
        let response = self.send(path, self.request(Method::GET, path)?).await?;
        Self::json_body(response, "chatbot_prompt").await
    }

    /// Replaces the chatbot system prompt via `POST api/chatbot/prompt` with
    /// body `{"prompt": ..}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn set_chatbot_prompt(&self, prompt: &str) -> Result<(), ApiError> {
        let path = "api/chatbot/prompt";
        let body = serde_json::json!({ "prompt": prompt });
        self.send(path, self.request(Method::POST, path)?.json(&body))
            .await?;
        Ok(())
    }
}
