//! User settings stored as settings.json in the app data directory

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub api_base: Option<String>,
    pub request_timeout_secs: u64,
    pub load_model_timeout_secs: u64,

    // Domains
    pub domains: Vec<String>,
    pub last_domain: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            api_base: None,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            load_model_timeout_secs: LOAD_MODEL_TIMEOUT_SECS,
            domains: DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
            last_domain: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Settings>(&s) {
                Ok(mut settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings.domains.retain(|d| !d.trim().is_empty());
                    if settings.domains.is_empty() {
                        settings.domains = Self::default().domains;
                    }
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn api_base_or_default(&self) -> &str {
        self.api_base
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(API_BASE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn load_model_timeout(&self) -> Duration {
        Duration::from_secs(self.load_model_timeout_secs.max(1))
    }

    /// Saved outer window position; `None` until the window has been placed once
    pub fn window_position(&self) -> Option<egui::Pos2> {
        Some(egui::pos2(self.window_x?, self.window_y?))
    }

    pub fn window_size(&self) -> Option<egui::Vec2> {
        Some(egui::vec2(self.window_w?, self.window_h?))
    }

    /// Last used domain if it is still offered, else the first one
    pub fn initial_domain(&self) -> String {
        self.last_domain
            .as_ref()
            .filter(|d| self.domains.contains(d))
            .or_else(|| self.domains.first())
            .cloned()
            .unwrap_or_else(|| "general".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base_or_default(), "http://localhost:8000");
        assert_eq!(settings.initial_domain(), "general");
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            api_base: Some("http://10.0.0.2:9000".into()),
            domains: vec!["legal".into(), "tax".into()],
            last_domain: Some("tax".into()),
            ..Default::default()
        };
        settings.save(dir.path());

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded, settings);
        assert_eq!(loaded.initial_domain(), "tax");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), r#"{"domains": [" ", ""]}"#).unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.domains, Settings::default().domains);
        assert_eq!(loaded.request_timeout_secs, REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn stale_last_domain_is_ignored() {
        let settings = Settings {
            last_domain: Some("removed".into()),
            ..Default::default()
        };
        assert_eq!(settings.initial_domain(), "general");
    }

    #[test]
    fn blank_api_base_uses_builtin_origin() {
        let settings = Settings {
            api_base: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(settings.api_base_or_default(), API_BASE);
    }

    #[test]
    fn geometry_needs_both_coordinates() {
        let settings = Settings {
            window_x: Some(40.0),
            window_w: Some(900.0),
            window_h: Some(600.0),
            ..Default::default()
        };
        assert_eq!(settings.window_position(), None);
        assert_eq!(settings.window_size(), Some(egui::vec2(900.0, 600.0)));
    }
}
