//! # Navigation Handlers
//!
//! Screen switching with the auth guard.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::app::tasks;

/// Handle a screen change request. Protected screens bounce to the auth
/// screen without a session; entering a data screen kicks off any fetch its
/// queries need.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    screen: Screen,
) {
    {
        let mut state = state.write();
        if screen.requires_auth() && !state.is_authenticated() {
            tracing::debug!(screen = screen.title(), "redirecting unauthenticated user");
            state.current_screen = Screen::Auth;
            return;
        }
        state.current_screen = screen;
    }

    match screen {
        Screen::Quotes => tasks::quotes::spawn_list_fetch_if_needed(state, event_tx),
        Screen::Chart => tasks::chart::spawn_chart_fetches_if_needed(state, event_tx),
        Screen::Auth => {}
    }
}
