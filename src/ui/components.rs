//! Reusable UI components
//!
//! Standalone widgets used by the sidebar and the chat panel.

use crate::theme;
use crate::types::{AnswerDetails, ChatMessage, ChatRole};
use eframe::egui;

/// Small pill showing a domain name
pub fn domain_tag(ui: &mut egui::Ui, domain: &str) -> egui::Response {
    let (bg, fg) = theme::domain_colors(domain);
    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, fg.gamma_multiply(0.4)))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(domain).size(theme::FONT_SMALL).color(fg))
                    .selectable(false),
            );
        })
        .response
}

/// One chat bubble; user bubbles align right, everything else left.
pub fn chat_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (fill, stroke, text_color) = match message.role {
        ChatRole::User => (theme::BUBBLE_USER, egui::Stroke::NONE, theme::TEXT_PRIMARY),
        ChatRole::Bot => (
            theme::BUBBLE_BOT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
            theme::TEXT_SECONDARY,
        ),
        ChatRole::Error => (
            theme::BUBBLE_ERROR,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BUBBLE_ERROR_STROKE),
            theme::BUBBLE_ERROR_TEXT,
        ),
    };
    let layout = if message.role == ChatRole::User {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        let max_width = theme::BUBBLE_MAX_WIDTH.min(ui.available_width() * 0.8);
        egui::Frame::new()
            .fill(fill)
            .stroke(stroke)
            .corner_radius(theme::RADIUS_LARGE)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    let text = match message.role {
                        ChatRole::Error => format!(
                            "{}  Error: {}",
                            egui_phosphor::regular::WARNING,
                            message.text
                        ),
                        _ => message.text.clone(),
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(text).size(theme::FONT_BODY).color(text_color),
                        )
                        .wrap(),
                    );
                    if let Some(details) = &message.details {
                        answer_details(ui, details);
                    }
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(message.at.format("%H:%M").to_string())
                                .size(theme::FONT_CAPTION)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
            });
    });
}

fn answer_details(ui: &mut egui::Ui, details: &AnswerDetails) {
    if !details.key_points.is_empty() {
        ui.add_space(theme::SPACING_SM);
        for point in &details.key_points {
            ui.label(egui::RichText::new(format!("•  {}", point)).size(theme::FONT_LABEL));
        }
    }
    if let Some(guidance) = &details.guidance {
        ui.add_space(theme::SPACING_SM);
        ui.add(egui::Label::new(egui::RichText::new(guidance).size(theme::FONT_LABEL).italics()).wrap());
    }
    if let Some(error) = &details.error {
        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", egui_phosphor::regular::WARNING, error))
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_ERROR),
            )
            .wrap(),
        );
    }
    if !details.citations.is_empty() {
        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("Sources: {}", details.citations.join(", ")))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            )
            .wrap(),
        );
    }
    if let Some(disclaimer) = &details.disclaimer {
        ui.add(
            egui::Label::new(
                egui::RichText::new(disclaimer)
                    .size(theme::FONT_CAPTION)
                    .color(theme::TEXT_DIM),
            )
            .wrap(),
        );
    }
}
