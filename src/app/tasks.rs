//! Background requests and how their results land back in the session

use super::App;
use crate::api::{cancellable, ApiError};
use crate::state::upload_busy_notice;
use crate::types::*;
use crate::uploads::UploadSource;
use crate::utils::format_bytes;
use eframe::egui;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Result of a finished request, sent from the runtime to the UI thread
pub(crate) enum TaskOutcome {
    ModelLoaded {
        domain: String,
        result: Result<LoadModelReply, ApiError>,
    },
    Uploaded {
        name: String,
        domain: String,
        result: Result<UploadReceipt, ApiError>,
    },
    Answered {
        result: Result<QueryAnswer, ApiError>,
    },
}

impl TaskOutcome {
    fn operation(&self) -> Operation {
        match self {
            TaskOutcome::ModelLoaded { .. } => Operation::LoadModel,
            TaskOutcome::Uploaded { .. } => Operation::Upload,
            TaskOutcome::Answered { .. } => Operation::Query,
        }
    }
}

impl App {
    fn track(&mut self, op: Operation) -> CancellationToken {
        let token = CancellationToken::new();
        self.cancel_tokens.insert(op, token.clone());
        token
    }

    pub fn load_model(&mut self, ctx: &egui::Context) {
        if !self.session.begin_load_model() {
            return;
        }
        let domain = self.domain.clone();
        let token = self.track(Operation::LoadModel);
        let api = self.api.clone();
        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();

        info!(domain = %domain, "Loading model");
        self.runtime.spawn(async move {
            let result = cancellable(&token, api.load_model(&domain)).await;
            let _ = tx.send(TaskOutcome::ModelLoaded { domain, result });
            ctx.request_repaint();
        });
    }

    pub fn upload(&mut self, ctx: &egui::Context, source: UploadSource) {
        let name = source.name();
        if !self.session.begin_upload() {
            info!(name = %name, "Upload already running, ignoring new file");
            self.notice = Some(upload_busy_notice(&name));
            return;
        }
        let domain = self.domain.clone();
        let token = self.track(Operation::Upload);
        let api = self.api.clone();
        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();

        info!(name = %name, domain = %domain, "Uploading document");
        self.runtime.spawn(async move {
            let result = match source.into_payload().await {
                Ok(payload) => {
                    debug!(size = %format_bytes(payload.bytes.len() as u64), "File read");
                    cancellable(&token, api.upload(payload, &domain)).await
                }
                Err(e) => Err(ApiError::Io(e)),
            };
            let _ = tx.send(TaskOutcome::Uploaded { name, domain, result });
            ctx.request_repaint();
        });
    }

    pub fn send_question(&mut self, ctx: &egui::Context) {
        let Some(request) = self.session.begin_query(&self.question, &self.domain) else {
            return;
        };
        self.scroll_to_end = true;
        let token = self.track(Operation::Query);
        let api = self.api.clone();
        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();

        info!(domain = %request.domain, doc_id = ?request.doc_id, "Sending question");
        self.runtime.spawn(async move {
            let result = cancellable(&token, api.query(&request)).await;
            let _ = tx.send(TaskOutcome::Answered { result });
            ctx.request_repaint();
        });
    }

    pub fn cancel(&mut self, op: Operation) {
        if let Some(token) = self.cancel_tokens.get(&op) {
            info!(?op, "Cancelling request");
            token.cancel();
        }
    }

    pub fn cancel_all(&mut self) {
        for token in self.cancel_tokens.values() {
            token.cancel();
        }
    }

    /// Apply every finished request to the session
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.cancel_tokens.remove(&outcome.operation());
            match outcome {
                TaskOutcome::ModelLoaded { domain, result } => {
                    self.notice = Some(self.session.finish_load_model(&domain, result));
                }
                TaskOutcome::Uploaded { name, domain, result } => {
                    self.session.finish_upload(&name, &domain, result);
                }
                TaskOutcome::Answered { result } => {
                    self.session.finish_query(result);
                    self.scroll_to_end = true;
                }
            }
        }
    }
}
