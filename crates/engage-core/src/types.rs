//! Entity types shared across the API client, store, and CLI.
//!
//! All types model the JSON shapes exchanged with the engage REST backend.
//! Field names on the wire are camelCase; engagements use Mongo-style `_id`.
//! Status and category are free-form tenant-configured strings, so both are
//! optional and matched case-insensitively by the filter engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::Filterable;

/// A sales lead as returned by `GET api/lead`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Lead score in `0..=100`, when the backend has computed one.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Payload for creating a lead via `POST api/lead`.
///
/// The backend assigns `id`, `score`, and `last_active`; a full refetch after
/// creation picks those up.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A customer engagement as returned by `GET api/engagements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub total_messages: u64,
    /// Percentage in `0..=100`.
    #[serde(default)]
    pub response_rate: Option<f64>,
    #[serde(default)]
    pub avg_response_time_hours: Option<f64>,
    #[serde(default)]
    pub last_contact_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_message: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
}

/// Payload for creating an engagement via `POST api/engagements`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEngagement {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single WhatsApp/email message attached to an engagement.
///
/// The replies endpoint is loose about which fields are present, so
/// everything except nothing is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// `"whatsapp"` or `"email"`.
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Tenant business profile stored under settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// The field targeted by a bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkField {
    Status,
    Category,
}

impl BulkField {
    /// Wire spelling used as the JSON key in bulk-update bodies.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BulkField::Status => "status",
            BulkField::Category => "category",
        }
    }
}

impl std::fmt::Display for BulkField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which metadata list a settings mutation targets.
///
/// The backend uses singular path segments: `api/settings/category` and
/// `api/settings/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Category,
    Status,
}

impl SettingKind {
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            SettingKind::Category => "category",
            SettingKind::Status => "status",
        }
    }
}

impl std::fmt::Display for SettingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl Filterable for Lead {
    fn search_haystacks(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.note.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Filterable for Engagement {
    fn search_haystacks(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.notes.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_deserializes_with_missing_optional_fields() {
        let lead: Lead =
            serde_json::from_str(r#"{"id": "l1", "name": "Ann"}"#).expect("minimal lead");
        assert_eq!(lead.id, "l1");
        assert_eq!(lead.name, "Ann");
        assert!(lead.status.is_none());
        assert!(lead.last_active.is_none());
    }

    #[test]
    fn engagement_uses_mongo_id_field() {
        let body = r#"{
            "_id": "e1",
            "name": "Acme rollout",
            "status": "Active",
            "totalMessages": 12,
            "responseRate": 80.5,
            "avgResponseTimeHours": 1.5
        }"#;
        let engagement: Engagement = serde_json::from_str(body).expect("engagement");
        assert_eq!(engagement.id, "e1");
        assert_eq!(engagement.total_messages, 12);
        assert_eq!(engagement.response_rate, Some(80.5));
    }

    #[test]
    fn new_lead_omits_absent_fields() {
        let payload = NewLead {
            name: "Bo".to_owned(),
            email: None,
            phone: None,
            status: Some("New".to_owned()),
            category: None,
            note: None,
        };
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "Bo", "status": "New"}));
    }

    #[test]
    fn bulk_field_wire_spelling() {
        assert_eq!(BulkField::Status.as_str(), "status");
        assert_eq!(BulkField::Category.as_str(), "category");
    }

    #[test]
    fn setting_kind_uses_singular_path_segments() {
        assert_eq!(SettingKind::Category.path_segment(), "category");
        assert_eq!(SettingKind::Status.path_segment(), "status");
    }
}
