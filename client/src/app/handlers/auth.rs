//! # Authentication Handlers
//!
//! Handlers for login, registration and session-related actions.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, AuthState};
use crate::utils::validation;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    identifier: String,
    password: String,
) {
    // Only presence checks here; credential strength is the backend's call.
    let check = validation::validate_identifier(&identifier);
    let message = check
        .error
        .or_else(|| password.is_empty().then(|| "Password is required".to_string()));
    if let Some(message) = message {
        let mut state = state.write();
        if let AuthState::Login { error, .. } = &mut state.auth {
            *error = Some(message);
        }
        return;
    }

    let (api, session_manager) = {
        let state = state.read();
        (state.api.clone(), state.session_manager.clone())
    };
    let api = match api {
        Some(api) => api,
        None => {
            let mut state = state.write();
            if let AuthState::Login { error, .. } = &mut state.auth {
                *error = Some("Backend not available".to_string());
            }
            return;
        }
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = session_manager.login(api.as_ref(), identifier, password).await;
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });

    let mut state = state.write();
    if let AuthState::Login { error, .. } = &mut state.auth {
        *error = Some("Signing in...".to_string());
    }
}

/// Handle register button click
///
/// Internal handler function - use [`crate::app::App::handle_register_click`] instead.
pub(crate) fn handle_register_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
) {
    let checks = [
        validation::validate_username(&username),
        validation::validate_email(&email),
        validation::validate_password(&password),
    ];
    for check in checks {
        if let Some(message) = check.error {
            let mut state = state.write();
            if let AuthState::Register { error, .. } = &mut state.auth {
                *error = Some(message);
            }
            return;
        }
    }

    if password != confirm_password {
        let mut state = state.write();
        if let AuthState::Register { error, .. } = &mut state.auth {
            *error = Some("Passwords don't match".to_string());
        }
        return;
    }

    let (api, session_manager) = {
        let state = state.read();
        (state.api.clone(), state.session_manager.clone())
    };
    let api = match api {
        Some(api) => api,
        None => {
            let mut state = state.write();
            if let AuthState::Register { error, .. } = &mut state.auth {
                *error = Some("Backend not available".to_string());
            }
            return;
        }
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = session_manager
            .register(api.as_ref(), username, email, password)
            .await;
        let _ = tx.send(AppEvent::RegisterResult(result)).await;
    });

    let mut state = state.write();
    if let AuthState::Register { error, .. } = &mut state.auth {
        *error = Some("Creating account...".to_string());
    }
}

/// Handle a federated-login provider button click. The flow completes in the
/// system browser.
pub(crate) fn handle_provider_click(state: Arc<RwLock<AppState>>, provider: &str) {
    let session_manager = state.read().session_manager.clone();
    if let Err(e) = session_manager.login_with_provider(provider) {
        let mut state = state.write();
        if let AuthState::Login { error, .. } = &mut state.auth {
            *error = Some(e.message().to_string());
        }
    }
}

/// Switch to the login form
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::login();
}

/// Switch to the registration form
pub(crate) fn handle_switch_to_register(state: Arc<RwLock<AppState>>) {
    state.write().auth = AuthState::register();
}

/// Handle logout button click
pub(crate) fn handle_logout(state: Arc<RwLock<AppState>>) {
    tracing::info!("logging out");
    state.write().force_logout();
}
