//! Session state and the transitions applied to it
//!
//! Everything here is plain data. The egui layer calls `begin_*` before
//! spawning a request and `finish_*` when the result arrives, then redraws
//! from whatever the session now holds.

use crate::api::ApiError;
use crate::constants::*;
use crate::types::*;
use std::collections::HashSet;
use tracing::{error, info};

/// Shown when a file arrives while another upload is still running
pub fn upload_busy_notice(name: &str) -> Notice {
    Notice {
        title: "Upload in progress".to_string(),
        body: format!("{} was not uploaded. Wait for the current upload to finish.", name),
        is_error: true,
    }
}

#[derive(Default)]
pub struct Session {
    documents: Vec<UploadedDocument>,
    transcript: Vec<ChatMessage>,
    upload_status: UploadStatus,
    in_flight: HashSet<Operation>,
}

impl Session {
    pub fn documents(&self) -> &[UploadedDocument] {
        &self.documents
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn upload_status(&self) -> &UploadStatus {
        &self.upload_status
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.in_flight.contains(&op)
    }

    /// Questions always target the most recent upload.
    pub fn document_for_next_question(&self) -> Option<&UploadedDocument> {
        self.documents.last()
    }

    pub fn load_model_label(&self) -> &'static str {
        if self.is_pending(Operation::LoadModel) {
            LOADING_LABEL
        } else {
            LOAD_MODEL_LABEL
        }
    }

    // ------------------------------------------------------------------------
    // Load model
    // ------------------------------------------------------------------------

    /// Returns false if a load is already running.
    pub fn begin_load_model(&mut self) -> bool {
        self.in_flight.insert(Operation::LoadModel)
    }

    pub fn finish_load_model(
        &mut self,
        domain: &str,
        result: Result<LoadModelReply, ApiError>,
    ) -> Notice {
        self.in_flight.remove(&Operation::LoadModel);
        match result {
            Ok(reply) => {
                info!(domain, message = ?reply.message, "Model loaded");
                Notice {
                    title: "Model loaded".to_string(),
                    body: format!("Model loaded for {}", domain),
                    is_error: false,
                }
            }
            Err(e) => {
                error!(domain, error = %e, "Load model failed");
                Notice {
                    title: LOAD_MODEL_FALLBACK.to_string(),
                    body: e.user_message(LOAD_MODEL_FALLBACK),
                    is_error: true,
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------------

    /// Returns false if an upload is already running.
    pub fn begin_upload(&mut self) -> bool {
        if !self.in_flight.insert(Operation::Upload) {
            return false;
        }
        self.upload_status = UploadStatus::Uploading;
        true
    }

    pub fn finish_upload(
        &mut self,
        name: &str,
        domain: &str,
        result: Result<UploadReceipt, ApiError>,
    ) {
        self.in_flight.remove(&Operation::Upload);
        match result {
            Ok(receipt) => {
                info!(doc_id = %receipt.doc_id, name, domain, message = ?receipt.message, "Document uploaded");
                self.documents.push(UploadedDocument {
                    doc_id: receipt.doc_id,
                    name: name.to_string(),
                    domain: domain.to_string(),
                });
                self.upload_status = UploadStatus::Uploaded(name.to_string());
            }
            Err(e) => {
                error!(name, domain, error = %e, detail = ?e.detail(), "Upload failed");
                self.upload_status = UploadStatus::Failed;
            }
        }
    }

    // ------------------------------------------------------------------------
    // Query
    // ------------------------------------------------------------------------

    /// Blank questions and questions sent while another is pending are dropped.
    pub fn begin_query(&mut self, raw: &str, domain: &str) -> Option<QueryRequest> {
        let question = raw.trim();
        if question.is_empty() || self.is_pending(Operation::Query) {
            return None;
        }

        let doc_id = self.document_for_next_question().map(|d| d.doc_id.clone());
        self.transcript.push(ChatMessage::new(ChatRole::User, question));
        self.in_flight.insert(Operation::Query);

        Some(QueryRequest {
            question: question.to_string(),
            domain: domain.to_string(),
            doc_id,
        })
    }

    pub fn finish_query(&mut self, result: Result<QueryAnswer, ApiError>) {
        self.in_flight.remove(&Operation::Query);
        match result {
            Ok(answer) => {
                let mut message = ChatMessage::new(ChatRole::Bot, answer.summary);
                if !answer.details.is_empty() {
                    message.details = Some(answer.details);
                }
                self.transcript.push(message);
            }
            Err(e) => {
                error!(error = %e, "Query failed");
                self.transcript
                    .push(ChatMessage::new(ChatRole::Error, e.user_message(QUERY_FALLBACK)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt(id: &str) -> Result<UploadReceipt, ApiError> {
        Ok(UploadReceipt { doc_id: id.to_string(), message: None })
    }

    fn upload(session: &mut Session, id: &str, name: &str, domain: &str) {
        assert!(session.begin_upload());
        session.finish_upload(name, domain, receipt(id));
    }

    fn backend_error(detail: Option<&str>) -> ApiError {
        ApiError::Status { status: 500, detail: detail.map(str::to_string) }
    }

    #[test]
    fn uploads_are_kept_in_order_without_dedup() {
        let mut session = Session::default();
        upload(&mut session, "d1", "lease.pdf", "legal");
        upload(&mut session, "d2", "lease.pdf", "legal");
        upload(&mut session, "d3", "bill.docx", "finance");

        let ids: Vec<&str> = session.documents().iter().map(|d| d.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
        assert_eq!(session.documents()[2].domain, "finance");
        assert_eq!(session.upload_status(), &UploadStatus::Uploaded("bill.docx".into()));
    }

    #[test]
    fn failed_upload_adds_nothing() {
        let mut session = Session::default();
        assert!(session.begin_upload());
        assert_eq!(session.upload_status(), &UploadStatus::Uploading);
        session.finish_upload("a.pdf", "legal", Err(backend_error(Some("bad pdf"))));

        assert!(session.documents().is_empty());
        assert_eq!(session.upload_status(), &UploadStatus::Failed);
        assert!(!session.is_pending(Operation::Upload));
    }

    #[test]
    fn second_upload_is_rejected_while_pending() {
        let mut session = Session::default();
        assert!(session.begin_upload());
        assert!(!session.begin_upload());
    }

    #[test]
    fn rejected_upload_keeps_status_and_names_the_file() {
        let mut session = Session::default();
        assert!(session.begin_upload());
        assert!(!session.begin_upload());
        assert_eq!(*session.upload_status(), UploadStatus::Uploading);

        let notice = upload_busy_notice("scan.pdf");
        assert!(notice.is_error);
        assert!(notice.body.starts_with("scan.pdf was not uploaded"));
    }

    #[test]
    fn query_without_documents_has_no_doc_id() {
        let mut session = Session::default();
        let request = session.begin_query("  What is this?  ", "general").unwrap();
        assert_eq!(request.question, "What is this?");
        assert_eq!(request.domain, "general");
        assert_eq!(request.doc_id, None);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, ChatRole::User);
    }

    #[test]
    fn query_targets_last_upload_regardless_of_ask_prompt() {
        let mut session = Session::default();
        upload(&mut session, "first", "a.pdf", "legal");
        upload(&mut session, "second", "b.pdf", "legal");

        let prompt = ask_prompt(&session.documents()[0].doc_id);
        assert_eq!(prompt, "Please summarize this document (id: first)");

        let request = session.begin_query(&prompt, "legal").unwrap();
        assert_eq!(request.doc_id.as_deref(), Some("second"));
    }

    #[test]
    fn blank_question_does_nothing() {
        let mut session = Session::default();
        assert!(session.begin_query("", "general").is_none());
        assert!(session.begin_query(" \n\t ", "general").is_none());
        assert!(session.transcript().is_empty());
        assert!(!session.is_pending(Operation::Query));
    }

    #[test]
    fn query_guard_blocks_only_queries() {
        let mut session = Session::default();
        assert!(session.begin_query("one", "general").is_some());
        assert!(session.begin_query("two", "general").is_none());
        assert_eq!(session.transcript().len(), 1);

        // Other operations are independent
        assert!(session.begin_upload());
        assert!(session.begin_load_model());
    }

    #[test]
    fn query_results_append_bubbles_and_release_send() {
        let mut session = Session::default();
        session.begin_query("q1", "general").unwrap();
        session.finish_query(Ok(QueryAnswer {
            summary: "answer".into(),
            details: AnswerDetails::default(),
        }));
        assert!(!session.is_pending(Operation::Query));
        assert_eq!(session.transcript()[1].role, ChatRole::Bot);
        assert!(session.transcript()[1].details.is_none());

        session.begin_query("q2", "general").unwrap();
        session.finish_query(Err(backend_error(Some("X"))));
        assert_eq!(session.transcript()[3].role, ChatRole::Error);
        assert_eq!(session.transcript()[3].text, "X");

        session.begin_query("q3", "general").unwrap();
        session.finish_query(Err(ApiError::Timeout));
        assert_eq!(session.transcript()[5].text, QUERY_FALLBACK);
        assert!(!session.is_pending(Operation::Query));
    }

    #[test]
    fn load_model_restores_label_on_every_outcome() {
        let mut session = Session::default();
        assert_eq!(session.load_model_label(), "Load Model");

        assert!(session.begin_load_model());
        assert_eq!(session.load_model_label(), "Loading...");
        let notice = session.finish_load_model("legal", Ok(LoadModelReply::default()));
        assert_eq!(notice.body, "Model loaded for legal");
        assert!(!notice.is_error);
        assert_eq!(session.load_model_label(), "Load Model");

        assert!(session.begin_load_model());
        let notice = session.finish_load_model("legal", Err(backend_error(Some("X"))));
        assert_eq!(notice.body, "X");
        assert!(notice.is_error);
        assert!(!session.is_pending(Operation::LoadModel));
        assert_eq!(session.load_model_label(), "Load Model");

        assert!(session.begin_load_model());
        let notice = session.finish_load_model("legal", Err(backend_error(None)));
        assert_eq!(notice.body, LOAD_MODEL_FALLBACK);
    }
}
