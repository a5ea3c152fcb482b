//! App module - contains the main application state and logic

mod chat;
mod modals;
mod sidebar;
mod tasks;

use crate::api::{ApiClient, ApiError};
use crate::settings::Settings;
use crate::state::Session;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub(crate) use tasks::TaskOutcome;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) session: Session,
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    // Current selections
    pub(crate) domain: String,
    pub(crate) question: String,
    pub(crate) focus_question: bool,
    pub(crate) scroll_to_end: bool,
    pub(crate) drag_over: bool,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Dialogs
    pub(crate) notice: Option<Notice>,
    pub(crate) show_settings: bool,
    pub(crate) settings_draft: SettingsDraft,
    // Background work
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) api: Arc<ApiClient>,
    pub(crate) outcome_tx: mpsc::UnboundedSender<TaskOutcome>,
    pub(crate) outcome_rx: mpsc::UnboundedReceiver<TaskOutcome>,
    pub(crate) cancel_tokens: HashMap<Operation, CancellationToken>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

/// Editable copy of the backend settings shown in the settings dialog
#[derive(Default)]
pub(crate) struct SettingsDraft {
    pub api_base: String,
    pub request_timeout: String,
    pub load_model_timeout: String,
    pub error: Option<String>,
}

impl SettingsDraft {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            api_base: settings.api_base_or_default().to_string(),
            request_timeout: settings.request_timeout_secs.to_string(),
            load_model_timeout: settings.load_model_timeout_secs.to_string(),
            error: None,
        }
    }
}

fn build_client(settings: &Settings) -> Result<ApiClient, ApiError> {
    ApiClient::new(
        settings.api_base_or_default(),
        settings.request_timeout(),
        settings.load_model_timeout(),
    )
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Result<Self, ApiError> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let api = Arc::new(build_client(&settings)?);
        info!(api_base = api.base_url(), "Backend client ready");

        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Ok(Self {
            session: Session::default(),
            domain: settings.initial_domain(),
            settings_draft: SettingsDraft::from_settings(&settings),
            settings,
            data_dir,
            question: String::new(),
            focus_question: true,
            scroll_to_end: false,
            drag_over: false,
            logo_texture: None,
            notice: None,
            show_settings: false,
            runtime,
            api,
            outcome_tx,
            outcome_rx,
            cancel_tokens: HashMap::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
        })
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.last_domain = Some(self.domain.clone());
        self.settings.save(&self.data_dir);
    }

    /// Validate the settings dialog and swap in a client for the new backend.
    pub fn apply_settings_draft(&mut self) -> bool {
        let parse = |s: &str| s.trim().parse::<u64>().ok().filter(|v| *v > 0);
        let (Some(request), Some(load)) = (
            parse(&self.settings_draft.request_timeout),
            parse(&self.settings_draft.load_model_timeout),
        ) else {
            self.settings_draft.error = Some("Timeouts must be whole seconds above zero".into());
            return false;
        };

        let mut next = self.settings.clone();
        let base = self.settings_draft.api_base.trim();
        next.api_base = (!base.is_empty()).then(|| base.to_string());
        next.request_timeout_secs = request;
        next.load_model_timeout_secs = load;

        match build_client(&next) {
            Ok(client) => {
                info!(api_base = client.base_url(), "Backend settings changed");
                // Requests already in flight keep the client they started with
                self.api = Arc::new(client);
                self.settings = next;
                self.settings_draft = SettingsDraft::from_settings(&self.settings);
                self.save_settings();
                true
            }
            Err(e) => {
                warn!(error = %e, "Rejected backend settings");
                self.settings_draft.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn open_settings(&mut self) {
        self.settings_draft = SettingsDraft::from_settings(&self.settings);
        self.show_settings = true;
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
