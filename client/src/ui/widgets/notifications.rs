//! # Notifications Widget
//!
//! Toast notification system using egui-notify for mutation confirmations
//! and session errors.

use egui_notify::Toasts;

use crate::app::NotificationLevel;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Queue a notification at the given level
    pub fn push(&mut self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Success => self.success(message),
            NotificationLevel::Error => self.error(message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
