//! Contact form intake. Submissions are validated and logged; there is no
//! delivery integration.

use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub message: Option<String>,
}

/// Form fields arrive from arbitrary clients: numbers and other JSON values
/// are kept as their text, `null` and `false` count as absent.
fn loose_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl ContactSubmission {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [&self.name, &self.email, &self.subject, &self.message]
            .into_iter()
            .zip(REQUIRED_FIELDS)
            .filter(|(value, _)| is_blank(value))
            .map(|(_, field)| field)
            .collect()
    }
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(StorefrontError::ValidationError {
                message: format!("Missing required fields: {}", missing.join(", ")),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactReceipt {
    pub received_at: DateTime<Utc>,
}

/// Validates and acknowledges a submission. Nothing is sent anywhere.
pub fn submit(submission: &ContactSubmission) -> Result<ContactReceipt> {
    submission.validate()?;

    let received_at = Utc::now();
    tracing::info!(
        sender = submission.name.as_deref().unwrap_or_default(),
        email = submission.email.as_deref().unwrap_or_default(),
        order_number = submission.order_number.as_deref().unwrap_or_default(),
        subject = submission.subject.as_deref().unwrap_or_default(),
        body = submission.message.as_deref().unwrap_or_default(),
        timestamp = %received_at.to_rfc3339(),
        "📨 Contact form submission"
    );

    Ok(ContactReceipt { received_at })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            name: Some("Amina".to_string()),
            email: Some("amina@example.com".to_string()),
            order_number: None,
            subject: Some("Sizing".to_string()),
            message: Some("Does the ring run small?".to_string()),
        }
    }

    #[test]
    fn test_complete_submission_is_acknowledged() {
        let receipt = submit(&complete()).unwrap();
        assert!(receipt.received_at <= Utc::now());
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let mut submission = complete();
        submission.email = None;

        assert_eq!(submission.missing_fields(), ["email"]);
        let err = submit(&submission).unwrap_err();
        assert!(err.to_string().contains("Missing required fields: email"));
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let submission = ContactSubmission {
            name: Some(String::new()),
            ..ContactSubmission::default()
        };
        assert_eq!(submission.missing_fields(), REQUIRED_FIELDS);
    }

    #[test]
    fn test_numeric_order_number_is_accepted() {
        let json = r#"{
            "name": "Amina",
            "email": "amina@example.com",
            "orderNumber": 12345,
            "subject": "Order",
            "message": "Where is it?"
        }"#;
        let submission: ContactSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.order_number.as_deref(), Some("12345"));
        assert!(submit(&submission).is_ok());
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let json = r#"{"name": null, "email": "a@b.co", "subject": "Hi", "message": "Hello"}"#;
        let submission: ContactSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.missing_fields(), ["name"]);
    }

    #[test]
    fn test_order_number_is_optional() {
        let json = serde_json::json!({
            "name": "Amina",
            "email": "amina@example.com",
            "orderNumber": "DAR-12345",
            "subject": "Order",
            "message": "Where is it?"
        });
        let submission: ContactSubmission = serde_json::from_value(json).unwrap();
        assert_eq!(submission.order_number.as_deref(), Some("DAR-12345"));
        assert!(submission.validate().is_ok());
    }
}
