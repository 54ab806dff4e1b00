//! Background fetch tasks for the chart aggregates.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, CHART_REFETCH_INTERVAL};
use crate::query::QueryKey;

/// Fetch whichever chart aggregate is due: never fetched, invalidated, or
/// older than the refetch interval. No-op without a session.
pub(crate) fn spawn_chart_fetches_if_needed(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
) {
    let (api, token) = {
        let state = state.read();
        match (state.api.clone(), state.access_token()) {
            (Some(api), Some(token)) => (api, token),
            _ => return,
        }
    };

    let by_creator_key = QueryKey::quotes_by_creator();
    let top_voted_key = QueryKey::top_voted_quotes();

    let (fetch_by_creator, fetch_top_voted) = {
        let mut state = state.write();
        let a = state
            .chart
            .by_creator
            .needs_fetch(&by_creator_key, Some(CHART_REFETCH_INTERVAL))
            && state.chart.by_creator.begin_fetch(&by_creator_key);
        let b = state
            .chart
            .top_voted
            .needs_fetch(&top_voted_key, Some(CHART_REFETCH_INTERVAL))
            && state.chart.top_voted.begin_fetch(&top_voted_key);
        (a, b)
    };

    if fetch_by_creator {
        let api = api.clone();
        let token = token.clone();
        let tx = event_tx.clone();
        tokio::spawn(async move {
            let result = api.quotes_by_creator(&token).await;
            let _ = tx.send(AppEvent::QuotesByCreatorResult(result)).await;
        });
    }

    if fetch_top_voted {
        let tx = event_tx.clone();
        tokio::spawn(async move {
            let result = api.top_voted_quotes(&token).await;
            let _ = tx.send(AppEvent::TopVotedQuotesResult(result)).await;
        });
    }
}
