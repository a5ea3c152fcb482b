//! Left sidebar: domain, model loading, uploads and the document list

use super::App;
use crate::constants::ask_prompt;
use crate::theme;
use crate::types::*;
use crate::ui::components::domain_tag;
use crate::uploads::UploadSource;
use crate::utils;
use eframe::egui;

impl App {
    pub(crate) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.render_header(ui, ctx);
                ui.add_space(theme::SPACING_LG);

                theme::section_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    self.render_model_section(ui, ctx);
                });
                ui.add_space(theme::SPACING_SM);

                theme::section_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    self.render_upload_section(ui, ctx);
                });
                ui.add_space(theme::SPACING_SM);

                theme::section_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    self.render_document_list(ui);
                });
            });
    }

    fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            if self.logo_texture.is_none() {
                if let Some((pixels, w, h)) = utils::rasterize_logo_square(64) {
                    self.logo_texture = Some(ctx.load_texture(
                        "logo",
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                        egui::TextureOptions::LINEAR,
                    ));
                }
            }
            if let Some(texture) = &self.logo_texture {
                ui.image(egui::load::SizedTexture::new(texture.id(), egui::vec2(32.0, 32.0)));
            }
            ui.add(
                egui::Label::new(
                    egui::RichText::new("DOC ASSISTANT")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(theme::button(egui_phosphor::regular::GEAR))
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.open_settings();
                }
            });
        });
    }

    fn section_label(ui: &mut egui::Ui, text: &str) {
        ui.add(
            egui::Label::new(
                egui::RichText::new(text)
                    .color(theme::TEXT_DIM)
                    .size(theme::FONT_SMALL),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);
    }

    fn render_model_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        Self::section_label(ui, "DOMAIN");

        let loading = self.session.is_pending(Operation::LoadModel);
        egui::ComboBox::from_id_salt("domain_select")
            .selected_text(self.domain.as_str())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for domain in &self.settings.domains {
                    ui.selectable_value(&mut self.domain, domain.clone(), domain.as_str());
                }
            });

        ui.add_space(theme::SPACING_MD);
        ui.horizontal(|ui| {
            let label = format!(
                "{}  {}",
                egui_phosphor::regular::CPU,
                self.session.load_model_label()
            );
            if ui.add_enabled(!loading, theme::button_accent(label)).clicked() {
                self.load_model(ctx);
            }
            if loading {
                ui.spinner();
                if ui
                    .add(theme::button(egui_phosphor::regular::X))
                    .on_hover_text("Cancel")
                    .clicked()
                {
                    self.cancel(Operation::LoadModel);
                }
            }
        });
    }

    fn render_upload_section(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        Self::section_label(ui, "UPLOAD");

        let uploading = self.session.is_pending(Operation::Upload);
        theme::drop_zone_frame(self.drag_over).show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), theme::DROP_ZONE_HEIGHT));
            ui.vertical_centered(|ui| {
                let color = if self.drag_over { theme::ACCENT } else { theme::TEXT_MUTED };
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::UPLOAD_SIMPLE)
                        .size(24.0)
                        .color(color),
                );
                ui.label(
                    egui::RichText::new("Drop a document here")
                        .size(theme::FONT_LABEL)
                        .color(color),
                );
                ui.add_space(theme::SPACING_SM);
                let pick = theme::button(format!("{}  Choose file", egui_phosphor::regular::FOLDER_OPEN));
                if ui.add_enabled(!uploading, pick).clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Documents", &["pdf", "docx", "doc", "txt"])
                        .add_filter("All files", &["*"])
                        .pick_file()
                    {
                        self.upload(ctx, UploadSource::Picked(path));
                    }
                }
            });
        });

        let status = self.session.upload_status();
        if *status != UploadStatus::Idle {
            ui.add_space(theme::SPACING_SM);
            let color = match status {
                UploadStatus::Uploaded(_) => theme::STATUS_SUCCESS,
                UploadStatus::Failed => theme::STATUS_ERROR,
                _ => theme::TEXT_MUTED,
            };
            ui.horizontal(|ui| {
                if uploading {
                    ui.spinner();
                }
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(status.text())
                            .size(theme::FONT_LABEL)
                            .color(color),
                    )
                    .truncate(),
                );
            });
        }
    }

    fn render_document_list(&mut self, ui: &mut egui::Ui) {
        Self::section_label(ui, "DOCUMENTS");

        if self.session.documents().is_empty() {
            ui.label(
                egui::RichText::new("No documents uploaded yet")
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_DIM),
            );
            return;
        }

        let mut ask: Option<String> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (i, doc) in self.session.documents().iter().enumerate() {
                    ui.push_id(i, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(egui_phosphor::regular::FILE_TEXT)
                                    .color(theme::TEXT_MUTED),
                            );
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(&doc.name)
                                        .strong()
                                        .size(theme::FONT_LABEL),
                                )
                                .truncate(),
                            )
                            .on_hover_text(doc.doc_id.as_str());
                            domain_tag(ui, &doc.domain);
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.add(theme::button("Ask")).clicked() {
                                    ask = Some(doc.doc_id.clone());
                                }
                            });
                        });
                    });
                }
            });

        if let Some(doc_id) = ask {
            self.question = ask_prompt(&doc_id);
            self.focus_question = true;
        }
    }

    /// Track hovered/dropped files for the drop zone.
    pub(crate) fn handle_file_drop(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone())
        });
        self.drag_over = hovering;

        // A drop during an upload is turned away with a notice by `upload`
        if let Some(source) = UploadSource::from_dropped(&dropped) {
            self.upload(ctx, source);
        }
    }
}
