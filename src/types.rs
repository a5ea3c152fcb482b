//! Common types and data structures

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A document accepted by the backend during this session
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub doc_id: String,
    pub name: String,
    pub domain: String,
}

/// A file ready to be sent as the `file` part of an upload
#[derive(Debug, Clone, PartialEq)]
pub struct FilePayload {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The three backend operations; each has its own in-flight guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    LoadModel,
    Upload,
    Query,
}

/// Status line under the drop zone
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Uploaded(String),
    Failed,
}

impl UploadStatus {
    pub fn text(&self) -> String {
        use crate::constants::*;
        match self {
            UploadStatus::Idle => String::new(),
            UploadStatus::Uploading => UPLOADING_STATUS.to_string(),
            UploadStatus::Uploaded(name) => format!("{}{}", UPLOADED_PREFIX, name),
            UploadStatus::Failed => UPLOAD_FAILED_STATUS.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
    Error,
}

/// One bubble in the chat transcript
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub details: Option<AnswerDetails>,
    pub at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            details: None,
            at: Local::now(),
        }
    }
}

/// Modal notice shown after a model load resolves
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub is_error: bool,
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
pub struct LoadModelRequest<'a> {
    pub domain: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoadModelReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    pub doc_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub question: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
}

/// Optional extras that accompany a summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerDetails {
    pub key_points: Vec<String>,
    pub guidance: Option<String>,
    pub citations: Vec<String>,
    pub disclaimer: Option<String>,
    pub error: Option<String>,
}

impl AnswerDetails {
    pub fn is_empty(&self) -> bool {
        self == &AnswerDetails::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer {
    pub summary: String,
    pub details: AnswerDetails,
}

impl QueryAnswer {
    /// A non-empty string `summary` wins; otherwise the whole body is the answer.
    pub fn from_value(value: serde_json::Value) -> Self {
        let summary = match value.get("summary").and_then(|s| s.as_str()) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => match &value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            },
        };

        let strings = |key: &str| -> Vec<String> {
            value
                .get(key)
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|i| i.as_str())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default()
        };
        let text = |key: &str| -> Option<String> {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let details = AnswerDetails {
            key_points: strings("key_points"),
            guidance: text("guidance"),
            citations: strings("citations"),
            disclaimer: text("disclaimer"),
            error: text("error"),
        };

        Self { summary, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_field_is_preferred() {
        let answer = QueryAnswer::from_value(json!({
            "summary": "The lease runs 12 months.",
            "key_points": ["term", "", "rent"],
            "citations": ["doc-1", null],
            "disclaimer": "Not legal advice",
            "guidance": ""
        }));
        assert_eq!(answer.summary, "The lease runs 12 months.");
        assert_eq!(answer.details.key_points, vec!["term", "rent"]);
        assert_eq!(answer.details.citations, vec!["doc-1"]);
        assert_eq!(answer.details.disclaimer.as_deref(), Some("Not legal advice"));
        assert_eq!(answer.details.guidance, None);
    }

    #[test]
    fn bare_string_body_is_the_summary() {
        let answer = QueryAnswer::from_value(json!("just text"));
        assert_eq!(answer.summary, "just text");
        assert!(answer.details.is_empty());
    }

    #[test]
    fn empty_summary_falls_back_to_whole_body() {
        let body = json!({"summary": "", "error": "GROQ_API_KEY not set"});
        let answer = QueryAnswer::from_value(body.clone());
        assert_eq!(answer.summary, body.to_string());
        assert_eq!(answer.details.error.as_deref(), Some("GROQ_API_KEY not set"));
    }

    #[test]
    fn query_request_omits_missing_doc_id() {
        let req = QueryRequest {
            question: "What is the term?".into(),
            domain: "legal".into(),
            doc_id: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, json!({"question": "What is the term?", "domain": "legal"}));
    }

    #[test]
    fn upload_status_text() {
        assert_eq!(UploadStatus::Idle.text(), "");
        assert_eq!(UploadStatus::Uploading.text(), "Uploading...");
        assert_eq!(UploadStatus::Uploaded("a.pdf".into()).text(), "Uploaded: a.pdf");
        assert_eq!(UploadStatus::Failed.text(), "Upload failed");
    }
}
