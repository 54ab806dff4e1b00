//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async fetch
//! tasks, and application state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                Main Thread (egui)                  │
//! │  App (orchestrator)                                │
//! │  - on_tick() - called every frame                  │
//! │  - handle_event() - processes async results        │
//! │  - handle_*_click() - user action handlers         │
//! │                                                    │
//! │  State: Arc<RwLock<AppState>>                      │
//! │  - locks held briefly, rendering clones a snapshot │
//! └──────────────────────┬─────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼─────────────────────────────┐
//! │            Async Tasks (Tokio runtime)             │
//! │  tasks::quotes / tasks::chart - query fetches      │
//! │  handlers::* - mutations spawned on click          │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Every frame, [`App::on_tick`] drains completed task results from the
//! channel, polls the search debouncer, and checks whether the current
//! screen's queries are due (the chart aggregates refetch on a fixed
//! interval). Fetches are deduplicated through the query cache, so calling
//! `on_tick` at any frame rate never stacks requests.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::service::ApiService;
use crate::services::session::SessionManager;
use event_handler::AppEventHandler;

/// Main application orchestrator.
///
/// Owns the shared state and the event channel. All UI interaction goes
/// through the `handle_*` methods; async results come back through the
/// channel and are applied in [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state. Locks are held for minimal
    /// duration to keep the UI responsive.
    pub state: Arc<RwLock<AppState>>,

    /// Receives `AppEvent` messages from async tasks. Polled in `on_tick()`
    /// with `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into async tasks for sending results back.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the application against the real backend, configured from the
    /// environment.
    pub fn new() -> Self {
        let api = Arc::new(crate::services::api::ApiClient::new());
        Self::with_api(api, SessionManager::from_env())
    }

    /// Create the application with an injected backend. Tests pass a mock
    /// [`ApiService`] here.
    pub fn with_api(api: Arc<dyn ApiService>, session_manager: SessionManager) -> Self {
        let mut state = AppState::new(session_manager);
        state.api = Some(api);

        let (event_tx, event_rx) = unbounded();
        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Per-frame driver. Applies completed async results, commits the search
    /// debouncer, and starts whichever fetches the current screen needs.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
        }

        let committed = self.state.write().quotes.search.poll();
        if committed.is_some() {
            tasks::quotes::spawn_list_fetch_if_needed(self.state.clone(), self.event_tx.clone());
        }

        let screen = self.state.read().current_screen;
        match screen {
            Screen::Quotes => {
                tasks::quotes::spawn_list_fetch_if_needed(self.state.clone(), self.event_tx.clone())
            }
            Screen::Chart => tasks::chart::spawn_chart_fetches_if_needed(
                self.state.clone(),
                self.event_tx.clone(),
            ),
            Screen::Auth => {}
        }
    }

    // User action handlers, called from the UI layer.

    pub fn handle_login_click(&self, identifier: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.event_tx.clone(),
            identifier,
            password,
        );
    }

    pub fn handle_register_click(
        &self,
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    ) {
        handlers::auth::handle_register_click(
            self.state.clone(),
            self.event_tx.clone(),
            username,
            email,
            password,
            confirm_password,
        );
    }

    pub fn handle_provider_click(&self, provider: &str) {
        handlers::auth::handle_provider_click(self.state.clone(), provider);
    }

    pub fn handle_switch_to_login(&self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    pub fn handle_switch_to_register(&self) {
        handlers::auth::handle_switch_to_register(self.state.clone());
    }

    pub fn handle_logout(&self) {
        handlers::auth::handle_logout(self.state.clone());
    }

    pub fn handle_screen_change(&self, screen: Screen) {
        handlers::navigation::handle_screen_change(
            self.state.clone(),
            self.event_tx.clone(),
            screen,
        );
    }

    pub fn handle_search_input(&self, value: String) {
        handlers::quotes::handle_search_input(self.state.clone(), value);
    }

    pub fn handle_sort_change(&self, sort_by: shared::SortBy) {
        handlers::quotes::handle_sort_change(self.state.clone(), self.event_tx.clone(), sort_by);
    }

    pub fn handle_open_create(&self) {
        handlers::quotes::handle_open_create(self.state.clone());
    }

    pub fn handle_open_edit(&self, quote: &shared::Quote) {
        handlers::quotes::handle_open_edit(self.state.clone(), quote);
    }

    pub fn handle_close_form(&self) {
        handlers::quotes::handle_close_form(self.state.clone());
    }

    pub fn handle_submit_form(&self) {
        handlers::quotes::handle_submit_form(self.state.clone(), self.event_tx.clone());
    }

    pub fn handle_vote_click(&self, quote_id: String) {
        handlers::quotes::handle_vote_click(self.state.clone(), self.event_tx.clone(), quote_id);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
