//! # Quotes Screen
//!
//! Search box, sort selector, the quote list, and the create/edit dialog.

use shared::SortBy;

use crate::app::{App, AppState};
use crate::query::QueryKey;
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, quote_card};

/// Render the quotes screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App, theme: &Theme) {
    ui.horizontal(|ui| {
        let mut search_input = state.quotes.search_input.clone();
        let response = ui.add_sized(
            [260.0, 26.0],
            egui::TextEdit::singleline(&mut search_input).hint_text("Search quotes..."),
        );
        if response.changed() {
            app.handle_search_input(search_input);
        }

        ui.add_space(10.0);
        ui.label(egui::RichText::new("Sort by").color(theme.dim));
        let mut sort_by = state.quotes.sort_by;
        egui::ComboBox::from_id_salt("quote_sort")
            .selected_text(sort_by.label())
            .show_ui(ui, |ui| {
                for option in SortBy::all() {
                    ui.selectable_value(&mut sort_by, *option, option.label());
                }
            });
        if sort_by != state.quotes.sort_by {
            app.handle_sort_change(sort_by);
        }
    });
    ui.add_space(10.0);

    let key = QueryKey::quotes(state.quotes.search.committed(), state.quotes.sort_by);
    let query = state.quotes.list.state(&key);

    if let Some(error) = &query.error {
        forms::render_error(ui, error.message(), theme);
    }

    match &query.data {
        None => {
            // First load for this search/sort combination.
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
            });
        }
        Some(quotes) if quotes.is_empty() => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                forms::render_hint(ui, "No quotes found", theme);
            });
        }
        Some(quotes) => {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for quote in quotes {
                    quote_card::render_quote_card(ui, state, app, quote, theme);
                }
            });
        }
    }

    if state.quotes.form.open {
        render_quote_form(ui.ctx(), state, app, theme);
    }
}

/// The create/edit dialog, as a floating window over the list.
fn render_quote_form(ctx: &egui::Context, state: &AppState, app: &App, theme: &Theme) {
    let form = &state.quotes.form;
    let title = if form.target_id.is_some() {
        "Edit Quote"
    } else {
        "New Quote"
    };

    let mut open = true;
    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let mut quote_input = form.quote.clone();
            let mut author_input = form.author.clone();

            let quote_changed =
                forms::render_text_area(ui, "Quote", &mut quote_input, "", [320.0, 80.0])
                    .changed();
            ui.add_space(8.0);
            let author_changed = forms::render_text_input(
                ui,
                "Author",
                &mut author_input,
                "",
                false,
                [320.0, 26.0],
            )
            .changed();
            ui.add_space(12.0);

            if quote_changed || author_changed {
                let mut state = app.state.write();
                state.quotes.form.quote = quote_input.clone();
                state.quotes.form.author = author_input.clone();
            }

            if let Some(error) = &form.error {
                forms::render_error(ui, error, theme);
            }

            ui.horizontal(|ui| {
                let submit_label = if form.submitting { "Saving..." } else { "Save" };
                let submit = forms::render_button(
                    ui,
                    submit_label,
                    Some(theme.selected.linear_multiply(0.6)),
                    None,
                );
                if submit.clicked() && !form.submitting {
                    app.handle_submit_form();
                }
                if forms::render_button(ui, "Cancel", None, None).clicked() {
                    app.handle_close_form();
                }
            });
        });

    if !open {
        app.handle_close_form();
    }
}
