//! QuoteDeck desktop client entry point.
//!
//! Boots the tracing pipeline, enters the shared tokio runtime so spawned
//! fetch tasks have an executor, and runs the eframe window loop.

use std::time::Duration;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quotedeck::ui::widgets::notifications::NotificationManager;
use quotedeck::utils::runtime::TOKIO_RT;
use quotedeck::{ui, App};

/// Frames refresh at least this often so debounce commits and interval
/// refetches fire without user input.
const IDLE_REPAINT: Duration = Duration::from_millis(250);

/// Initialize the logging system
///
/// Daily-rotated file logs under `logs/`, non-blocking writes so the UI
/// never stalls on I/O. The returned guard must live for the whole process
/// or buffered log lines are lost.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "quotedeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quotedeck=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    guard
}

struct QuoteDeckApp {
    app: App,
    notifications: NotificationManager,
}

impl eframe::App for QuoteDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        ui::render(ctx, &mut self.app, &mut self.notifications);

        let needs_repaint = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.needs_repaint)
        };
        if needs_repaint {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}

fn main() -> eframe::Result<()> {
    let _log_guard = init_tracing();
    tracing::info!("starting QuoteDeck client");

    // Keep the runtime context entered so handlers can tokio::spawn from
    // the UI thread.
    let _rt_guard = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("QuoteDeck"),
        ..Default::default()
    };

    eframe::run_native(
        "QuoteDeck",
        options,
        Box::new(|_cc| {
            Ok(Box::new(QuoteDeckApp {
                app: App::new(),
                notifications: NotificationManager::new(),
            }))
        }),
    )
}
