//! # Application State Types
//!
//! All state-related types for the application: screens, authentication,
//! quote browsing, and chart state.

use std::sync::Arc;
use std::time::Duration;

use shared::{CreatorQuoteCount, Quote, SortBy, TopVotedQuote};

use crate::core::service::ApiService;
use crate::query::{Debouncer, QueryCache};
use crate::services::session::{Session, SessionManager};

/// Search commits after this quiet window.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Chart aggregates refetch on this interval while the chart screen is open.
pub const CHART_REFETCH_INTERVAL: Duration = Duration::from_secs(120);

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Authentication screen (login/register)
    Auth,
    /// Quote browsing, searching and editing
    Quotes,
    /// Aggregate charts (quotes per creator, top voted)
    Chart,
}

impl Screen {
    /// Get all screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[Screen::Auth, Screen::Quotes, Screen::Chart]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth => "Sign In",
            Screen::Quotes => "Quotes",
            Screen::Chart => "Charts",
        }
    }

    /// Screens that require an authenticated session
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Quotes | Screen::Chart)
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Login form
    Login {
        identifier: String,
        password: String,
        error: Option<String>,
    },
    /// Registration form
    Register {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
        error: Option<String>,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            identifier: String::new(),
            password: String::new(),
            error: None,
        }
    }

    pub fn register() -> Self {
        AuthState::Register {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error: None,
        }
    }
}

/// A quote create/edit dialog. `target_id` is `None` for create, the quote id
/// for edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteForm {
    pub open: bool,
    pub quote: String,
    pub author: String,
    pub target_id: Option<String>,
    pub error: Option<String>,
    pub submitting: bool,
}

impl QuoteForm {
    pub fn open_create(&mut self) {
        *self = QuoteForm {
            open: true,
            ..QuoteForm::default()
        };
    }

    pub fn open_edit(&mut self, quote: &Quote) {
        *self = QuoteForm {
            open: true,
            quote: quote.content.clone(),
            author: quote.author.clone(),
            target_id: Some(quote.id.clone()),
            ..QuoteForm::default()
        };
    }

    pub fn close(&mut self) {
        *self = QuoteForm::default();
    }
}

/// Quote browsing state: the raw search box, the debouncer that commits it,
/// the sort order, the cached list, and the create/edit dialogs.
#[derive(Clone)]
pub struct QuotesState {
    pub search_input: String,
    pub search: Debouncer,
    pub sort_by: SortBy,
    pub list: QueryCache<Vec<Quote>>,
    pub form: QuoteForm,
}

impl Default for QuotesState {
    fn default() -> Self {
        Self {
            search_input: String::new(),
            search: Debouncer::new(SEARCH_DEBOUNCE),
            sort_by: SortBy::default(),
            list: QueryCache::new(),
            form: QuoteForm::default(),
        }
    }
}

/// Chart screen state: one cache per aggregate.
#[derive(Clone, Default)]
pub struct ChartState {
    pub by_creator: QueryCache<Vec<CreatorQuoteCount>>,
    pub top_voted: QueryCache<Vec<TopVotedQuote>>,
}

/// Central application state, shared between the UI thread and async tasks
/// behind `Arc<RwLock<..>>`. Lock holds stay brief; rendering clones a
/// snapshot.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub auth: AuthState,
    /// The active session, if any. Queries are disabled without one.
    pub session: Option<Session>,
    /// Signed token minted from the session, verified on restore.
    pub session_token: Option<String>,
    pub session_manager: SessionManager,
    pub quotes: QuotesState,
    pub chart: ChartState,
    /// Injected backend; `None` only before startup wiring completes.
    pub api: Option<Arc<dyn ApiService>>,
    /// Toast messages queued for the notification widget: (level, message).
    pub pending_notifications: Vec<(NotificationLevel, String)>,
    /// Set when a state change happened outside the frame loop and the UI
    /// should repaint promptly.
    pub needs_repaint: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl AppState {
    pub fn new(session_manager: SessionManager) -> Self {
        Self {
            current_screen: Screen::Auth,
            auth: AuthState::login(),
            session: None,
            session_token: None,
            session_manager,
            quotes: QuotesState::default(),
            chart: ChartState::default(),
            api: None,
            pending_notifications: Vec::new(),
            needs_repaint: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The backend access token, if a session is active.
    pub fn access_token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access_token.clone())
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.pending_notifications
            .push((NotificationLevel::Success, message.into()));
        self.needs_repaint = true;
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.pending_notifications
            .push((NotificationLevel::Error, message.into()));
        self.needs_repaint = true;
    }

    /// Drop the session and return to the auth screen. Used for explicit
    /// logout and whenever the backend rejects the token.
    pub fn force_logout(&mut self) {
        self.session = None;
        self.session_token = None;
        self.current_screen = Screen::Auth;
        self.auth = AuthState::login();
        self.quotes = QuotesState::default();
        self.chart = ChartState::default();
        self.needs_repaint = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_auth_requirements() {
        assert!(!Screen::Auth.requires_auth());
        assert!(Screen::Quotes.requires_auth());
        assert!(Screen::Chart.requires_auth());
    }

    #[test]
    fn test_force_logout_clears_everything() {
        let mut state = AppState::new(SessionManager::with_secret("test"));
        state.session = Some(Session {
            user_id: "1".to_string(),
            email: "a@b.com".to_string(),
            username: "a".to_string(),
            access_token: "tok1".to_string(),
        });
        state.session_token = Some("signed".to_string());
        state.current_screen = Screen::Quotes;
        state.quotes.search_input = "life".to_string();

        state.force_logout();

        assert!(!state.is_authenticated());
        assert!(state.session_token.is_none());
        assert_eq!(state.current_screen, Screen::Auth);
        assert!(state.quotes.search_input.is_empty());
    }

    #[test]
    fn test_quote_form_edit_prefills() {
        let quote = shared::Quote {
            id: "q1".to_string(),
            content: "Stay hungry".to_string(),
            author: "Jobs".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
            created_by_id: Some("1".to_string()),
            has_voted: false,
            count: shared::VoteCount { voted_by: 0 },
        };
        let mut form = QuoteForm::default();
        form.open_edit(&quote);
        assert!(form.open);
        assert_eq!(form.quote, "Stay hungry");
        assert_eq!(form.author, "Jobs");
        assert_eq!(form.target_id.as_deref(), Some("q1"));

        form.close();
        assert_eq!(form, QuoteForm::default());
    }
}
