//! Central chat panel: transcript, question box, send/cancel and export

use super::App;
use crate::constants::APP_NAME;
use crate::theme;
use crate::transcript;
use crate::types::*;
use crate::ui::components::chat_bubble;
use eframe::egui;
use tracing::{error, info};

impl App {
    pub(crate) fn render_chat_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("question_panel")
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                self.render_question_box(ui, ctx);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                self.render_chat_header(ui);
                ui.separator();
                self.render_transcript(ui);
            });
    }

    fn render_chat_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{}  Chat", egui_phosphor::regular::CHAT_CIRCLE_TEXT))
                    .size(theme::FONT_HEADING)
                    .strong(),
            );
            match self.session.document_for_next_question() {
                Some(doc) => ui.label(
                    egui::RichText::new(format!("Asking about {}", doc.name))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                ),
                None => ui.label(
                    egui::RichText::new("No document selected")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                ),
            };
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let has_messages = !self.session.transcript().is_empty();
                let export = theme::button(format!("{}  Export", egui_phosphor::regular::EXPORT));
                if ui.add_enabled(has_messages, export).clicked() {
                    self.export_transcript();
                }
            });
        });
    }

    fn render_transcript(&mut self, ui: &mut egui::Ui) {
        let scroll_to_end = std::mem::take(&mut self.scroll_to_end);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if self.session.transcript().is_empty() {
                    ui.add_space(theme::SPACING_XL);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Upload a document and ask a question")
                                .color(theme::TEXT_DIM),
                        );
                    });
                }
                for message in self.session.transcript() {
                    chat_bubble(ui, message);
                    ui.add_space(theme::SPACING_SM);
                }
                if self.session.is_pending(Operation::Query) {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(egui::RichText::new("Thinking...").color(theme::TEXT_DIM));
                    });
                }
                if scroll_to_end {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
    }

    fn render_question_box(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let sending = self.session.is_pending(Operation::Query);
        let button_width = 96.0;

        ui.horizontal(|ui| {
            let input_id = egui::Id::new("question_input");
            // Taken before the TextEdit runs so it never inserts the newline
            let enter_pressed =
                ui.memory(|m| m.has_focus(input_id)) && ui.input_mut(take_send_key);

            let input = ui.add(
                egui::TextEdit::multiline(&mut self.question)
                    .id(input_id)
                    .hint_text("Ask a question about your document... (Enter to send, Shift+Enter for newline)")
                    .desired_rows(2)
                    .desired_width(ui.available_width() - button_width - theme::SPACING_MD)
                    .min_size(egui::vec2(0.0, theme::INPUT_HEIGHT)),
            );
            if self.focus_question {
                self.focus_question = false;
                input.request_focus();
            }

            ui.vertical(|ui| {
                let send = theme::button_accent(format!(
                    "{}  Send",
                    egui_phosphor::regular::PAPER_PLANE_RIGHT
                ))
                .min_size(egui::vec2(button_width, 28.0));
                let clicked = ui.add_enabled(!sending, send).clicked();
                if (clicked || enter_pressed) && !sending {
                    self.send_question(ctx);
                }
                if sending {
                    let cancel = theme::button_danger(format!("{}  Cancel", egui_phosphor::regular::X_CIRCLE))
                        .min_size(egui::vec2(button_width, 28.0));
                    if ui.add(cancel).clicked() {
                        self.cancel(Operation::Query);
                    }
                }
            });
        });
    }

    fn export_transcript(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("transcript.html")
            .add_filter("HTML", &["html"])
            .save_file()
        else {
            return;
        };
        let html = transcript::render_document(self.session.transcript(), APP_NAME);
        match std::fs::write(&path, html) {
            Ok(()) => info!(path = %path.display(), "Transcript exported"),
            Err(e) => {
                error!(error = %e, path = %path.display(), "Transcript export failed");
                self.notice = Some(Notice {
                    title: "Export failed".to_string(),
                    body: e.to_string(),
                    is_error: true,
                });
            }
        }
    }
}

/// Plain Enter sends; Shift+Enter is left for the TextEdit to insert a newline.
fn take_send_key(input: &mut egui::InputState) -> bool {
    !input.modifiers.shift && input.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(modifiers: egui::Modifiers) -> egui::RawInput {
        egui::RawInput {
            modifiers,
            events: vec![egui::Event::Key {
                key: egui::Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers,
            }],
            ..Default::default()
        }
    }

    /// Returns (taken as send, still visible to widgets afterwards)
    fn run_frame(raw: egui::RawInput) -> (bool, bool) {
        let ctx = egui::Context::default();
        let mut seen = (false, false);
        let _ = ctx.run(raw, |ctx| {
            let taken = ctx.input_mut(take_send_key);
            let left = ctx.input(|i| i.key_pressed(egui::Key::Enter));
            seen = (taken, left);
        });
        seen
    }

    #[test]
    fn enter_is_consumed_as_send() {
        assert_eq!(run_frame(enter(egui::Modifiers::NONE)), (true, false));
    }

    #[test]
    fn shift_enter_stays_with_the_text_box() {
        assert_eq!(run_frame(enter(egui::Modifiers::SHIFT)), (false, true));
    }

    #[test]
    fn no_key_no_send() {
        assert_eq!(run_frame(egui::RawInput::default()), (false, false));
    }
}
