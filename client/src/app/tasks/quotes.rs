//! Background fetch task for the quote list.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::query::QueryKey;

/// Fetch the quote list for the current committed search and sort order, if
/// the cache says a fetch is due. No-op without a session; the list query is
/// disabled until login.
pub(crate) fn spawn_list_fetch_if_needed(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) {
    let (api, token, key, content, sort_by) = {
        let mut state = state.write();
        let token = match state.access_token() {
            Some(token) => token,
            None => return,
        };
        let api = match state.api.clone() {
            Some(api) => api,
            None => return,
        };

        let content = state.quotes.search.committed().to_string();
        let sort_by = state.quotes.sort_by;
        let key = QueryKey::quotes(&content, sort_by);
        if !state.quotes.list.needs_fetch(&key, None) {
            return;
        }
        if !state.quotes.list.begin_fetch(&key) {
            return;
        }
        (api, token, key, content, sort_by)
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api.list_quotes(&token, &content, sort_by).await;
        let _ = tx.send(AppEvent::QuotesResult { key, result }).await;
    });
}
