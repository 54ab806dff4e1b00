//! # GUI Theme
//!
//! Dark theme for the quote browser. High contrast, warm amber accent.

use egui::{Color32, Context, Stroke, Visuals};

/// Theme colors used across screens and widgets
#[derive(Debug, Clone)]
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Primary text
    pub text: Color32,
    /// Accent color for headings and selected elements
    pub selected: Color32,
    /// Success green
    pub success: Color32,
    /// Error red
    pub error: Color32,
    /// Dimmed secondary text
    pub dim: Color32,
    /// Panel and card fill
    pub panel: Color32,
    /// Card border
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(18, 18, 22),
            text: Color32::from_rgb(235, 235, 235),
            selected: Color32::from_rgb(255, 179, 0),
            success: Color32::from_rgb(80, 200, 120),
            error: Color32::from_rgb(235, 87, 87),
            dim: Color32::from_rgb(150, 150, 150),
            panel: Color32::from_rgb(28, 28, 34),
            border: Color32::from_rgb(55, 55, 62),
        }
    }
}

impl Theme {
    /// Apply the theme to the egui context
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel;
        visuals.override_text_color = Some(self.text);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.selection.bg_fill = self.selected.linear_multiply(0.4);
        ctx.set_visuals(visuals);
    }
}
