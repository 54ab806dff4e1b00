//! # Event Handler
//!
//! Handles async event results from background tasks, updating application
//! state accordingly.
//!
//! This module processes `AppEvent` messages received from fetch and mutation
//! tasks and updates the application state in a thread-safe manner. Any auth
//! failure delivered here, from any task, tears down the session.

use crate::app::state::{AuthState, Screen};
use crate::app::{tasks, App, AppEvent};
use crate::core::error::AppError;
use crate::query::QueryKey;
use crate::services::session::Session;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per-event for minimal duration to keep the UI
    /// responsive.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginResult(result) => {
                self.handle_session_result(result, true);
            }
            AppEvent::RegisterResult(result) => {
                self.handle_session_result(result, false);
            }
            AppEvent::QuotesResult { key, result } => {
                self.handle_quotes_result(key, result);
            }
            AppEvent::CreateQuoteResult(result) => {
                self.handle_mutation_result(result, "Quote created");
            }
            AppEvent::UpdateQuoteResult(result) => {
                self.handle_mutation_result(result, "Quote updated");
            }
            AppEvent::VoteQuoteResult { id, result } => {
                self.handle_vote_result(id, result);
            }
            AppEvent::QuotesByCreatorResult(result) => {
                self.handle_by_creator_result(result);
            }
            AppEvent::TopVotedQuotesResult(result) => {
                self.handle_top_voted_result(result);
            }
        }
    }
}

impl App {
    /// Login and registration share an outcome: a session, a signed token,
    /// and a jump to the quotes screen.
    fn handle_session_result(&mut self, result: Result<Session, AppError>, is_login: bool) {
        tracing::info!(success = result.is_ok(), is_login, "processing session result");

        {
            let mut state = self.state.write();
            match result {
                Ok(session) => {
                    match state.session_manager.encode_session(&session) {
                        Ok(token) => state.session_token = Some(token),
                        Err(e) => {
                            tracing::error!(error = %e, "failed to mint session token");
                            state.session_token = None;
                        }
                    }
                    state.notify_success(format!("Welcome, {}", session.username));
                    state.session = Some(session);
                    state.current_screen = Screen::Quotes;
                    state.auth = AuthState::login();
                    state.needs_repaint = true;
                }
                Err(e) => {
                    let message = e.message().to_string();
                    match &mut state.auth {
                        AuthState::Login { error, .. } if is_login => *error = Some(message),
                        AuthState::Register { error, .. } if !is_login => *error = Some(message),
                        _ => state.notify_error(message),
                    }
                    state.needs_repaint = true;
                    return;
                }
            }
        }

        // Freshly authenticated; pull the quote list immediately.
        tasks::quotes::spawn_list_fetch_if_needed(self.state.clone(), self.event_tx.clone());
    }

    fn handle_quotes_result(
        &mut self,
        key: QueryKey,
        result: Result<Vec<shared::Quote>, AppError>,
    ) {
        if self.fail_closed_on_auth_error(&result) {
            return;
        }
        let mut state = self.state.write();
        state.quotes.list.resolve(&key, result);
        state.needs_repaint = true;
    }

    /// Create and update resolve the same way: close the dialog on success,
    /// surface the backend message in it on failure, and refetch the list so
    /// the view shows what the backend now holds.
    fn handle_mutation_result(&mut self, result: Result<(), AppError>, success_message: &str) {
        if self.fail_closed_on_auth_error(&result) {
            return;
        }
        {
            let mut state = self.state.write();
            state.quotes.form.submitting = false;
            match result {
                Ok(()) => {
                    state.quotes.form.close();
                    state.notify_success(success_message);
                    state.quotes.list.invalidate_operation("quotes");
                    state.chart.by_creator.invalidate(&QueryKey::quotes_by_creator());
                    state.chart.top_voted.invalidate(&QueryKey::top_voted_quotes());
                }
                Err(e) => {
                    state.quotes.form.error = Some(e.message().to_string());
                }
            }
            state.needs_repaint = true;
        }
        tasks::quotes::spawn_list_fetch_if_needed(self.state.clone(), self.event_tx.clone());
    }

    /// A vote never changes counts locally. Success only invalidates and
    /// refetches; the backend's answer is the vote count.
    fn handle_vote_result(&mut self, id: String, result: Result<(), AppError>) {
        if self.fail_closed_on_auth_error(&result) {
            return;
        }
        {
            let mut state = self.state.write();
            match result {
                Ok(()) => {
                    tracing::debug!(quote_id = %id, "vote acknowledged");
                    state.quotes.list.invalidate_operation("quotes");
                    state.chart.top_voted.invalidate(&QueryKey::top_voted_quotes());
                }
                Err(e) => {
                    state.notify_error(e.message().to_string());
                }
            }
            state.needs_repaint = true;
        }
        tasks::quotes::spawn_list_fetch_if_needed(self.state.clone(), self.event_tx.clone());
    }

    fn handle_by_creator_result(
        &mut self,
        result: Result<Vec<shared::CreatorQuoteCount>, AppError>,
    ) {
        if self.fail_closed_on_auth_error(&result) {
            return;
        }
        let mut state = self.state.write();
        state
            .chart
            .by_creator
            .resolve(&QueryKey::quotes_by_creator(), result);
        state.needs_repaint = true;
    }

    fn handle_top_voted_result(&mut self, result: Result<Vec<shared::TopVotedQuote>, AppError>) {
        if self.fail_closed_on_auth_error(&result) {
            return;
        }
        let mut state = self.state.write();
        state
            .chart
            .top_voted
            .resolve(&QueryKey::top_voted_quotes(), result);
        state.needs_repaint = true;
    }

    /// An auth error from any task means the backend no longer accepts the
    /// token. Drop the session and return to the auth screen. Returns true
    /// when the event was consumed this way.
    fn fail_closed_on_auth_error<T>(&mut self, result: &Result<T, AppError>) -> bool {
        if let Err(e) = result {
            if e.is_auth() {
                tracing::warn!(error = %e, "session rejected, logging out");
                let mut state = self.state.write();
                state.force_logout();
                state.notify_error("Session expired, please sign in again");
                return true;
            }
        }
        false
    }
}
