//! # Chart Screen
//!
//! Two aggregate bar charts rendered with egui_plot: quotes per creator and
//! the top voted quotes.

use egui_plot::{Bar, BarChart, Plot};

use crate::app::{App, AppState};
use crate::query::{QueryKey, QueryState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const LABEL_MAX_CHARS: usize = 18;

/// Render the chart screen
pub fn render(ui: &mut egui::Ui, state: &AppState, _app: &App, theme: &Theme) {
    let by_creator = state.chart.by_creator.state(&QueryKey::quotes_by_creator());
    let top_voted = state.chart.top_voted.state(&QueryKey::top_voted_quotes());

    let half_height = (ui.available_height() - 60.0) / 2.0;

    ui.label(
        egui::RichText::new("Quotes per creator")
            .size(18.0)
            .strong()
            .color(theme.selected),
    );
    render_aggregate(ui, theme, "quotes_by_creator_plot", half_height, &by_creator, |row| {
        (row.username.clone(), row.quote_count as f64)
    });

    ui.add_space(12.0);
    ui.label(
        egui::RichText::new("Top voted quotes")
            .size(18.0)
            .strong()
            .color(theme.selected),
    );
    render_aggregate(ui, theme, "top_voted_plot", half_height, &top_voted, |row| {
        (row.content.clone(), row.vote_count as f64)
    });
}

/// Render one aggregate as a bar chart, with the row label on the x axis.
fn render_aggregate<T>(
    ui: &mut egui::Ui,
    theme: &Theme,
    id: &str,
    height: f32,
    query: &QueryState<Vec<T>>,
    to_bar: impl Fn(&T) -> (String, f64),
) {
    if let Some(error) = &query.error {
        forms::render_error(ui, error.message(), theme);
    }

    let rows = match &query.data {
        None => {
            ui.spinner();
            return;
        }
        Some(rows) if rows.is_empty() => {
            forms::render_hint(ui, "No data yet", theme);
            return;
        }
        Some(rows) => rows,
    };

    let labeled: Vec<(String, f64)> = rows.iter().map(&to_bar).collect();
    let bars: Vec<Bar> = labeled
        .iter()
        .enumerate()
        .map(|(i, (_, value))| Bar::new(i as f64, *value).width(0.6))
        .collect();

    let labels: Vec<String> = labeled
        .iter()
        .map(|(label, _)| shared::truncate_label(label, LABEL_MAX_CHARS))
        .collect();

    Plot::new(id.to_string())
        .height(height)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_grid(true)
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round() as usize;
            if (mark.value - index as f64).abs() < 0.01 {
                labels.get(index).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(id.to_string(), bars).color(theme.selected));
        });
}
