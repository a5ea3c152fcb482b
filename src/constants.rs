//! Application constants and configuration

pub const API_BASE: &str = "http://localhost:8000";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Doc Assistant";

/// Domains offered when settings.json does not list any
pub const DEFAULT_DOMAINS: &[&str] = &["general", "legal", "finance", "healthcare"];

pub const REQUEST_TIMEOUT_SECS: u64 = 120;
pub const LOAD_MODEL_TIMEOUT_SECS: u64 = 600;

// Control labels
pub const LOAD_MODEL_LABEL: &str = "Load Model";
pub const LOADING_LABEL: &str = "Loading...";

// Upload status text
pub const UPLOADING_STATUS: &str = "Uploading...";
pub const UPLOADED_PREFIX: &str = "Uploaded: ";
pub const UPLOAD_FAILED_STATUS: &str = "Upload failed";

// Generic fallbacks when the backend gives no `detail`
pub const LOAD_MODEL_FALLBACK: &str = "Load model failed";
pub const QUERY_FALLBACK: &str = "Query failed";
pub const CANCELLED_MESSAGE: &str = "Request cancelled";

/// Prompt placed in the question box by a document's "Ask" button
pub fn ask_prompt(doc_id: &str) -> String {
    format!("Please summarize this document (id: {})", doc_id)
}
