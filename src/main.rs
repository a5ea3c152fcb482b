#![windows_subsystem = "windows"]
//! Doc Assistant - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod settings;
mod state;
mod theme;
mod transcript;
mod types;
mod ui;
mod uploads;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::{error, info};

/// Log to a daily file under `<data dir>/logs`. Keep the returned guard alive
/// until exit or buffered lines are lost.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("cannot create log directory {}: {}", logs_dir.display(), e);
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&logs_dir, "doc-assistant.log"));
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,doc_assistant=debug"));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry().with(filter).with(file_layer).init();
    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, data_dir = %data_dir.display(), "Doc Assistant starting");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to start async runtime");
            panic!("Failed to start async runtime: {}", e);
        }
    };

    let settings = settings::Settings::load(&data_dir);
    let saved_pos = settings.window_position();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size(settings.window_size().unwrap_or(egui::vec2(1100.0, 720.0)))
        .with_min_inner_size([860.0, 560.0])
        .with_drag_and_drop(true);
    if let Some(pos) = saved_pos {
        viewport = viewport.with_position(pos);
    }
    if let Some((rgba, width, height)) = utils::rasterize_logo_square(256) {
        viewport = viewport.with_icon(std::sync::Arc::new(egui::IconData { rgba, width, height }));
    }

    eframe::run_native(
        APP_NAME,
        eframe::NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir, runtime)?;
            // First launch has no saved position
            app.needs_center = saved_pos.is_none();
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Results from background requests
        self.poll_outcomes();

        self.handle_file_drop(ctx);

        self.render_notice(ctx);
        self.render_settings(ctx);

        // Side panel must be added before the central panel
        self.render_sidebar(ctx);
        self.render_chat_panel(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.cancel_all();
        self.save_settings();
    }
}
