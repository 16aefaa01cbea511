//! Frontend Models
//!
//! Data structures matching the forms API payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Label shown when a form has no readable creation date
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Opaque form identifier assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub String);

impl FormId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Publication state of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Draft,
    Published,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Draft => "draft",
            FormStatus::Published => "published",
        }
    }
}

/// Form summary as listed by `GET /forms` (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(rename = "_id", alias = "id")]
    pub id: FormId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: FormStatus,
    #[serde(default)]
    pub submissions_count: u64,
    /// `None` when the backend sent no date or one that does not parse
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accept any JSON value for a timestamp; only RFC 3339 strings yield a date
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|date| date.with_timezone(&Utc)))
}

impl Form {
    /// Description text, or the placeholder shown for forms without one
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => "No description",
        }
    }

    /// Creation date for the table layout, e.g. `Jan 5, 2024`
    pub fn created_label(&self) -> String {
        self.format_created("%b %-d, %Y")
    }

    /// Creation date for the card layout, e.g. `Jan 5`
    pub fn created_short_label(&self) -> String {
        self.format_created("%b %-d")
    }

    fn format_created(&self, pattern: &str) -> String {
        match self.created_at {
            Some(date) => date.format(pattern).to_string(),
            None => INVALID_DATE_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) fn make_form(id: &str, title: &str) -> Form {
    Form {
        id: FormId::from(id),
        title: title.to_string(),
        description: None,
        status: FormStatus::Draft,
        submissions_count: 0,
        created_at: DateTime::parse_from_rfc3339("2024-01-05T10:30:00Z")
            .map(|d| d.with_timezone(&Utc))
            .ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_form() {
        let json = r#"{
            "_id": "65a1f0c2",
            "title": "Survey",
            "description": "Quarterly survey",
            "status": "published",
            "submissionsCount": 12,
            "createdAt": "2024-01-05T10:30:00.000Z",
            "fields": [{"type": "text"}]
        }"#;

        let form: Form = serde_json::from_str(json).unwrap();
        assert_eq!(form.id, FormId::from("65a1f0c2"));
        assert_eq!(form.title, "Survey");
        assert_eq!(form.status, FormStatus::Published);
        assert_eq!(form.submissions_count, 12);
        assert_eq!(form.description_or_placeholder(), "Quarterly survey");
    }

    #[test]
    fn test_deserialize_accepts_plain_id_and_missing_fields() {
        let json = r#"{"id": "abc", "title": "Draft", "createdAt": "2023-11-20T00:00:00Z"}"#;

        let form: Form = serde_json::from_str(json).unwrap();
        assert_eq!(form.id.as_str(), "abc");
        assert_eq!(form.status, FormStatus::Draft);
        assert_eq!(form.submissions_count, 0);
        assert_eq!(form.description, None);
    }

    #[test]
    fn test_description_placeholder() {
        let mut form = make_form("1", "Empty");
        assert_eq!(form.description_or_placeholder(), "No description");
        form.description = Some(String::new());
        assert_eq!(form.description_or_placeholder(), "No description");
    }

    #[test]
    fn test_created_labels() {
        let form = make_form("1", "Dated");
        assert_eq!(form.created_label(), "Jan 5, 2024");
        assert_eq!(form.created_short_label(), "Jan 5");
    }

    #[test]
    fn test_bad_or_missing_date_still_decodes() {
        let json = r#"[
            {"_id": "1", "title": "No date"},
            {"_id": "2", "title": "Garbled", "createdAt": "not a date"},
            {"_id": "3", "title": "Numeric", "createdAt": 1704450600000},
            {"_id": "4", "title": "Null", "createdAt": null},
            {"_id": "5", "title": "Fine", "createdAt": "2024-01-05T10:30:00.000Z"}
        ]"#;

        let forms: Vec<Form> = serde_json::from_str(json).unwrap();
        assert_eq!(forms.len(), 5);
        for form in &forms[..4] {
            assert_eq!(form.created_at, None);
            assert_eq!(form.created_label(), "Invalid Date");
            assert_eq!(form.created_short_label(), "Invalid Date");
        }
        assert_eq!(forms[4].created_label(), "Jan 5, 2024");
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(FormStatus::Draft.as_str(), "draft");
        assert_eq!(FormStatus::Published.as_str(), "published");
    }
}
