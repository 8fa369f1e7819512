//! Lead endpoints: paginated list, create, bulk mutate, and file import.

use engage_core::types::{BulkField, Lead, NewLead};
use reqwest::{multipart, Method, StatusCode};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::DataEnvelope;

impl ApiClient {
    /// Fetches one page of leads from `GET api/lead?page&limit`.
    ///
    /// A 304 Not Modified response yields an empty page.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Status`] on a non-2xx response.
    /// - [`ApiError::Deserialize`] if the body does not match `{"data": [..]}`.
    pub async fn list_leads(&self, page: u32, limit: u32) -> Result<Vec<Lead>, ApiError> {
        let path = "api/lead";
        let builder = self
            .request(Method::GET, path)?
            .query(&[("page", page), ("limit", limit)]);
        let response = self.send(path, builder).await?;
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(Vec::new());
        }
        let envelope: DataEnvelope<Vec<Lead>> =
            Self::json_body(response, &format!("list_leads(page={page})")).await?;
        Ok(envelope.data)
    }

    /// Creates a lead via `POST api/lead`.
    ///
    /// The backend assigns server-side fields; callers refetch rather than
    /// inserting optimistically.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn create_lead(&self, lead: &NewLead) -> Result<(), ApiError> {
        let path = "api/lead";
        self.send(path, self.request(Method::POST, path)?.json(lead))
            .await?;
        Ok(())
    }

    /// Sets `field` to `value` on every lead in `ids` via
    /// `PUT api/lead/bulk-update` with body `{"id": [..], "<field>": value}`.
    ///
    /// The response shape cannot express partial success, so the call is
    /// all-or-nothing from the client's point of view.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn bulk_update_leads(
        &self,
        field: BulkField,
        value: &str,
        ids: &[String],
    ) -> Result<(), ApiError> {
        let path = "api/lead/bulk-update";
        let mut body = serde_json::json!({ "id": ids });
        body[field.as_str()] = serde_json::Value::String(value.to_owned());
        self.send(path, self.request(Method::PUT, path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Deletes every lead in `ids` via `DELETE api/lead/bulk-delete` with the
    /// ids in the request body.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn bulk_delete_leads(&self, ids: &[String]) -> Result<(), ApiError> {
        let path = "api/lead/bulk-delete";
        let body = serde_json::json!({ "id": ids });
        self.send(path, self.request(Method::DELETE, path)?.json(&body))
            .await?;
        Ok(())
    }

    /// Imports a spreadsheet of leads via multipart
    /// `POST api/lead/bulk-import` with `file`, `extension`, and `category`
    /// parts. The backend picks its parser from the extension.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingExtension`] if `file_name` has no extension.
    /// - [`ApiError::Http`] or [`ApiError::Status`] on failure.
    pub async fn import_leads(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        category: &str,
    ) -> Result<(), ApiError> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ApiError::MissingExtension(file_name.to_owned()))?
            .to_owned();

        let part = multipart::Part::bytes(contents).file_name(file_name.to_owned());
        let form = multipart::Form::new()
            .part("file", part)
            .text("extension", extension)
            .text("category", category.to_owned());

        let path = "api/lead/bulk-import";
        self.send(path, self.request(Method::POST, path)?.multipart(form))
            .await?;
        Ok(())
    }
}
