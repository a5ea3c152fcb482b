//! Colours, sizes and widget styling for Doc Assistant
//! UI code should pull every colour and size from here

use egui::{Color32, Stroke};

// =============================================================================
// COLORS - Surfaces
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0b, 0x0d, 0x12); // slate-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x13, 0x17, 0x20);
pub const BG_INPUT: Color32 = Color32::from_rgb(0x10, 0x13, 0x1a);
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1e, 0x23, 0x30);
pub const BG_HOVER: Color32 = Color32::from_rgb(0x1a, 0x1f, 0x33); // indigo tint
const BG_ACTIVE: Color32 = Color32::from_rgb(0x25, 0x2b, 0x3d);
const BG_POPUP: Color32 = Color32::from_rgb(0x15, 0x19, 0x24);

// =============================================================================
// COLORS - Accent (Indigo)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x81, 0x8c, 0xf8); // indigo-400
const ACCENT_TEXT: Color32 = Color32::from_rgb(0x0f, 0x10, 0x2e);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

// =============================================================================
// COLORS - Borders & status
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700

pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80); // green-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Chat bubbles
// =============================================================================
pub const BUBBLE_USER: Color32 = Color32::from_rgb(0x31, 0x2e, 0x81); // indigo-900
pub const BUBBLE_BOT: Color32 = Color32::from_rgb(0x17, 0x1c, 0x28);
pub const BUBBLE_ERROR: Color32 = Color32::from_rgb(0x2a, 0x0e, 0x12);
pub const BUBBLE_ERROR_STROKE: Color32 = Color32::from_rgb(0x7f, 0x1d, 0x1d);
pub const BUBBLE_ERROR_TEXT: Color32 = Color32::from_rgb(0xfc, 0xa5, 0xa5);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x27, 0x30, 0x42);
pub const BTN_ACCENT: Color32 = ACCENT;
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xb9, 0x1c, 0x1c); // red-700

/// (background, text) for a domain tag; unknown domains get slate
pub fn domain_colors(domain: &str) -> (Color32, Color32) {
    let fg = match domain {
        "legal" => Color32::from_rgb(0x38, 0xbd, 0xf8),
        "finance" => Color32::from_rgb(0xfb, 0xbf, 0x24),
        "healthcare" => Color32::from_rgb(0xf4, 0x72, 0xb6),
        _ => TEXT_MUTED,
    };
    (fg.gamma_multiply(0.08), fg)
}

// =============================================================================
// TYPOGRAPHY
// =============================================================================
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const DROP_ZONE_HEIGHT: f32 = 96.0;
pub const BUBBLE_MAX_WIDTH: f32 = 560.0;
pub const INPUT_HEIGHT: f32 = 64.0;

pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 10.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

fn widget(bg: Color32, weak_bg: Color32, border: Stroke, fg: Color32) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak_bg,
        bg_stroke: border,
        fg_stroke: Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    }
}

pub fn apply_visuals(ctx: &egui::Context) {
    let border = Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);

    let mut hovered = widget(BG_HOVER, BG_SURFACE, Stroke::new(STROKE_DEFAULT, ACCENT.gamma_multiply(0.5)), TEXT_PRIMARY);
    hovered.fg_stroke.width = STROKE_MEDIUM;
    let mut active = widget(BG_ACTIVE, BG_ACTIVE, Stroke::NONE, TEXT_PRIMARY);
    active.expansion = -1.0;

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_POPUP,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT.gamma_multiply(0.35),
            stroke: Stroke::new(STROKE_DEFAULT, ACCENT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_ELEVATED, BG_SURFACE, border, TEXT_PRIMARY),
            inactive: widget(Color32::TRANSPARENT, BG_ELEVATED, border, TEXT_SECONDARY),
            hovered,
            active,
            open: widget(BG_SURFACE, BG_ELEVATED, border, TEXT_PRIMARY),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: border,
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        menu_corner_radius: egui::CornerRadius::same(RADIUS_DEFAULT as u8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Bordered sidebar section
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_LG)
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_POPUP)
        .stroke(Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

/// Drop zone; accent border while files hover over the window
pub fn drop_zone_frame(drag_over: bool) -> egui::Frame {
    let (fill, stroke) = if drag_over {
        (BG_HOVER, ACCENT)
    } else {
        (BG_INPUT, BORDER_DEFAULT)
    };
    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(STROKE_MEDIUM, stroke))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_LG)
}

// =============================================================================
// HELPER - Buttons
// =============================================================================

pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Primary action (Send, Load Model, Save)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_TEXT))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DANGER)
        .corner_radius(RADIUS_DEFAULT)
}
