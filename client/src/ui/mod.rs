//! # GUI Rendering Framework
//!
//! Orchestrates the UI rendering pipeline with egui widgets. Rendering works
//! on a cloned snapshot of the state so no lock is held while drawing.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Screen};
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    };

    // Hand queued toasts to the notification widget.
    {
        let mut state_write = app.state.write();
        for (level, message) in state_write.pending_notifications.drain(..) {
            notifications.push(level, message);
        }
    }

    let theme = Theme::default();
    theme.apply(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        let current_screen = state.current_screen;

        // Protected screens bounce to auth without a session.
        if current_screen.requires_auth() && !state.is_authenticated() {
            app.handle_screen_change(Screen::Auth);
            screens::auth::render(ui, &state, app, &theme);
            return;
        }

        if state.is_authenticated() {
            widgets::header::render_header(ui, &state, app, &theme);
        }

        match current_screen {
            Screen::Auth => screens::auth::render(ui, &state, app, &theme),
            Screen::Quotes => screens::quotes::render(ui, &state, app, &theme),
            Screen::Chart => screens::chart::render(ui, &state, app, &theme),
        }
    });

    notifications.show(ctx);
}
