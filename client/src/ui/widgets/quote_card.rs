//! # Quote Card Widget
//!
//! One quote: content, author, the vote heart with the backend's count, and
//! an edit button for the owner's own un-voted quotes.

use shared::Quote;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;

/// Whether the signed-in user may edit this quote: their own, and nobody has
/// voted on it yet.
pub fn can_edit(state: &AppState, quote: &Quote) -> bool {
    let owner = match (&state.session, &quote.created_by_id) {
        (Some(session), Some(creator)) => session.user_id == *creator,
        _ => false,
    };
    owner && quote.vote_count() == 0
}

/// Render one quote card
pub fn render_quote_card(ui: &mut egui::Ui, state: &AppState, app: &App, quote: &Quote, theme: &Theme) {
    egui::Frame::group(ui.style())
        .fill(theme.panel)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(
                egui::RichText::new(format!("\u{201c}{}\u{201d}", quote.content)).size(16.0),
            );
            ui.add_space(6.0);
            ui.colored_label(theme.dim, format!("\u{2014} {}", quote.author));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                // Heart reflects only what the backend reported; a click
                // sends the toggle and waits for the refetch.
                let heart = if quote.has_voted { "\u{2665}" } else { "\u{2661}" };
                let heart_color = if quote.has_voted { theme.error } else { theme.dim };
                let vote_label =
                    egui::RichText::new(format!("{} {}", heart, quote.vote_count()))
                        .size(15.0)
                        .color(heart_color);
                if ui
                    .add(egui::Button::new(vote_label).frame(false))
                    .clicked()
                {
                    app.handle_vote_click(quote.id.clone());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(
                        theme.dim,
                        shared::format_timestamp(&quote.updated_at),
                    );
                    if can_edit(state, quote) && ui.small_button("Edit").clicked() {
                        app.handle_open_edit(quote);
                    }
                });
            });
        });
    ui.add_space(8.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::session::{Session, SessionManager};
    use shared::VoteCount;

    fn state_for(user_id: &str) -> AppState {
        let mut state = AppState::new(SessionManager::with_secret("test"));
        state.session = Some(Session {
            user_id: user_id.to_string(),
            email: "a@b.com".to_string(),
            username: "a".to_string(),
            access_token: "tok1".to_string(),
        });
        state
    }

    fn quote_by(creator: Option<&str>, votes: u32) -> Quote {
        Quote {
            id: "q1".to_string(),
            content: "x".to_string(),
            author: "y".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            created_by_id: creator.map(str::to_string),
            has_voted: false,
            count: VoteCount { voted_by: votes },
        }
    }

    #[test]
    fn test_can_edit_own_unvoted_quote_only() {
        let state = state_for("1");
        assert!(can_edit(&state, &quote_by(Some("1"), 0)));
        assert!(!can_edit(&state, &quote_by(Some("1"), 1)));
        assert!(!can_edit(&state, &quote_by(Some("2"), 0)));
        assert!(!can_edit(&state, &quote_by(None, 0)));
    }

    #[test]
    fn test_cannot_edit_without_session() {
        let state = AppState::new(SessionManager::with_secret("test"));
        assert!(!can_edit(&state, &quote_by(Some("1"), 0)));
    }
}
