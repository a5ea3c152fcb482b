//! Modal dialogs (notices, settings)

use super::App;
use crate::constants::*;
use crate::theme;
use eframe::egui;
use tracing::warn;

impl App {
    pub(crate) fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("notice_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let response = modal.show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.set_max_width(380.0);
            ui.vertical_centered(|ui| {
                let (icon, color) = if notice.is_error {
                    (egui_phosphor::regular::WARNING, theme::STATUS_ERROR)
                } else {
                    (egui_phosphor::regular::CHECK_CIRCLE, theme::ACCENT)
                };
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(icon).size(36.0).color(color));
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(&notice.title).size(theme::FONT_HEADING).strong());
                ui.add_space(theme::SPACING_SM);
                ui.add(
                    egui::Label::new(egui::RichText::new(&notice.body).color(theme::TEXT_MUTED))
                        .wrap(),
                );
                ui.add_space(theme::SPACING_XL);
                if ui
                    .add(theme::button_accent(format!("{}  OK", egui_phosphor::regular::CHECK)))
                    .clicked()
                {
                    self.notice = None;
                }
            });
        });
        if response.should_close() {
            self.notice = None;
        }
    }

    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());
        let response = modal.show(ctx, |ui| {
            ui.set_min_width(400.0);
            ui.set_max_width(400.0);

            ui.label(egui::RichText::new("Settings").size(theme::FONT_HEADING).strong());
            ui.add_space(theme::SPACING_MD);

            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([theme::SPACING_LG, theme::SPACING_MD])
                .show(ui, |ui| {
                    ui.label("Backend URL");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_draft.api_base)
                            .hint_text(API_BASE)
                            .desired_width(240.0),
                    );
                    ui.end_row();

                    ui.label("Request timeout (s)");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_draft.request_timeout)
                            .desired_width(80.0),
                    );
                    ui.end_row();

                    ui.label("Model load timeout (s)");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings_draft.load_model_timeout)
                            .desired_width(80.0),
                    );
                    ui.end_row();
                });

            if let Some(err) = &self.settings_draft.error {
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{}  {}", egui_phosphor::regular::WARNING, err))
                            .color(theme::BUBBLE_ERROR_TEXT),
                    )
                    .wrap(),
                );
            }

            ui.add_space(theme::SPACING_LG);
            ui.label(
                egui::RichText::new(format!("{} v{}", APP_NAME, APP_VERSION))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(theme::SPACING_MD);

            ui.horizontal(|ui| {
                if ui
                    .add(theme::button(format!("{}  Open logs", egui_phosphor::regular::FOLDER_OPEN)))
                    .clicked()
                {
                    let dir = self.logs_dir();
                    if let Err(e) = open::that(&dir) {
                        warn!(error = %e, path = %dir.display(), "Failed to open log folder");
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button_accent("Save")).clicked() && self.apply_settings_draft() {
                        self.show_settings = false;
                    }
                    if ui.add(theme::button("Close")).clicked() {
                        self.show_settings = false;
                    }
                });
            });
        });
        if response.should_close() {
            self.show_settings = false;
        }
    }
}
