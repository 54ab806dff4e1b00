//! # Header Widget
//!
//! Top bar shown on authenticated screens: navigation, the signed-in user,
//! the New Quote button, and logout.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;

/// Render the header bar
pub fn render_header(ui: &mut egui::Ui, state: &AppState, app: &App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("QuoteDeck")
                .size(20.0)
                .strong()
                .color(theme.selected),
        );
        ui.add_space(20.0);

        for screen in Screen::all() {
            if !screen.requires_auth() {
                continue;
            }
            let selected = state.current_screen == *screen;
            let label = egui::RichText::new(screen.title()).size(15.0).color(
                if selected { theme.selected } else { theme.text },
            );
            if ui.selectable_label(selected, label).clicked() && !selected {
                app.handle_screen_change(*screen);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Log out").clicked() {
                app.handle_logout();
            }
            if state.current_screen == Screen::Quotes && ui.button("+ New Quote").clicked() {
                app.handle_open_create();
            }
            if let Some(session) = &state.session {
                ui.colored_label(theme.dim, &session.username);
            }
        });
    });
    ui.add_space(5.0);
    ui.separator();
    ui.add_space(5.0);
}
