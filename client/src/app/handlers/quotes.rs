//! # Quote Handlers
//!
//! Handlers for search input, sorting, the create/edit dialog and voting.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{Quote, QuoteBody, SortBy};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::utils::validation;

/// Record a search box edit. The request only fires once the debounce window
/// elapses, from the frame tick.
pub(crate) fn handle_search_input(state: Arc<RwLock<AppState>>, value: String) {
    let mut state = state.write();
    if state.quotes.search_input == value {
        return;
    }
    state.quotes.search_input = value.clone();
    state.quotes.search.update(&value);
}

/// Handle a sort order change. Takes effect immediately; the list re-keys on
/// the new order.
pub(crate) fn handle_sort_change(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    sort_by: SortBy,
) {
    {
        let mut state = state.write();
        if state.quotes.sort_by == sort_by {
            return;
        }
        state.quotes.sort_by = sort_by;
    }
    tasks::quotes::spawn_list_fetch_if_needed(state, event_tx);
}

/// Open the create dialog
pub(crate) fn handle_open_create(state: Arc<RwLock<AppState>>) {
    state.write().quotes.form.open_create();
}

/// Open the edit dialog prefilled from an existing quote
pub(crate) fn handle_open_edit(state: Arc<RwLock<AppState>>, quote: &Quote) {
    state.write().quotes.form.open_edit(quote);
}

/// Close the create/edit dialog, discarding its contents
pub(crate) fn handle_close_form(state: Arc<RwLock<AppState>>) {
    state.write().quotes.form.close();
}

/// Submit the create/edit dialog. Creates when the form has no target id,
/// updates otherwise.
pub(crate) fn handle_submit_form(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (quote, author, target_id) = {
        let state = state.read();
        if state.quotes.form.submitting {
            return;
        }
        (
            state.quotes.form.quote.clone(),
            state.quotes.form.author.clone(),
            state.quotes.form.target_id.clone(),
        )
    };

    if let Some(message) = validation::validate_quote(&quote, &author).error {
        state.write().quotes.form.error = Some(message);
        return;
    }

    let (api, token) = {
        let state = state.read();
        (state.api.clone(), state.access_token())
    };
    let (api, token) = match (api, token) {
        (Some(api), Some(token)) => (api, token),
        _ => return,
    };

    state.write().quotes.form.submitting = true;

    let body = QuoteBody { quote, author };
    let tx = event_tx.clone();
    tokio::spawn(async move {
        match target_id {
            None => {
                let result = api.create_quote(&token, body).await;
                let _ = tx.send(AppEvent::CreateQuoteResult(result)).await;
            }
            Some(id) => {
                let result = api.update_quote(&token, &id, body).await;
                let _ = tx.send(AppEvent::UpdateQuoteResult(result)).await;
            }
        }
    });
}

/// Handle a vote heart click. The count shown never changes until the
/// refetch brings back what the backend says.
pub(crate) fn handle_vote_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    quote_id: String,
) {
    let (api, token) = {
        let state = state.read();
        (state.api.clone(), state.access_token())
    };
    let (api, token) = match (api, token) {
        (Some(api), Some(token)) => (api, token),
        _ => return,
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.vote_quote(&token, &quote_id).await;
        let _ = tx
            .send(AppEvent::VoteQuoteResult {
                id: quote_id,
                result,
            })
            .await;
    });
}
