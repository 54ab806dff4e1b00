//! # Session Manager
//!
//! Owns the session lifecycle: exchanging credentials for a session, minting
//! and verifying the signed session token, and the federated-login hand-off.
//!
//! The session token is a signed JWT wrapping the backend access token plus
//! the user's identity. Verification failure of any kind means no session;
//! the caller falls back to the auth screen.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// Environment variable naming the session-token signing secret.
pub const SESSION_SECRET_ENV: &str = "QUOTEDECK_SESSION_SECRET";

/// Environment variable naming the backend's federated-login entry URL.
pub const OAUTH_URL_ENV: &str = "QUOTEDECK_OAUTH_URL";

const DEV_SESSION_SECRET: &str = "quotedeck-dev-session-secret";

/// Session tokens outlive any realistic desktop session.
const SESSION_LIFETIME_HOURS: i64 = 24;

/// An authenticated session: the user's identity plus the backend access
/// token attached to every authenticated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub access_token: String,
}

/// Claims carried inside the signed session token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    email: String,
    username: String,
    access_token: String,
    iat: i64,
    exp: i64,
}

/// Mints and verifies signed session tokens, and drives the login flows.
#[derive(Clone)]
pub struct SessionManager {
    secret: String,
}

impl SessionManager {
    /// Read the signing secret from `QUOTEDECK_SESSION_SECRET`. Falls back to
    /// a fixed development secret with a warning.
    pub fn from_env() -> Self {
        let secret = match std::env::var(SESSION_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "{} not set, using development session secret",
                    SESSION_SECRET_ENV
                );
                DEV_SESSION_SECRET.to_string()
            }
        };
        Self { secret }
    }

    /// Construct with an explicit secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Exchange credentials for a session. Every failure, wrong password,
    /// unknown user, or backend outage alike, collapses to the same
    /// "Invalid credentials" error so the auth screen leaks nothing about
    /// which part was wrong.
    pub async fn login(
        &self,
        api: &dyn ApiService,
        identifier: String,
        password: String,
    ) -> Result<Session> {
        match api.login(identifier, password).await {
            Ok(response) => {
                tracing::info!(username = %response.user.username, "login succeeded");
                Ok(Session {
                    user_id: response.user.id,
                    email: response.user.email,
                    username: response.user.username,
                    access_token: response.access_token,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                Err(AppError::Auth("Invalid credentials".to_string()))
            }
        }
    }

    /// Register a new account and establish a session from the response.
    pub async fn register(
        &self,
        api: &dyn ApiService,
        username: String,
        email: String,
        password: String,
    ) -> Result<Session> {
        let response = api.register(username, email, password).await?;
        tracing::info!(username = %response.user.username, "registration succeeded");
        Ok(Session {
            user_id: response.user.id,
            email: response.user.email,
            username: response.user.username,
            access_token: response.access_token,
        })
    }

    /// Mint a signed session token for an established session.
    pub fn encode_session(&self, session: &Session) -> Result<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: session.user_id.clone(),
            email: session.email.clone(),
            username: session.username.clone(),
            access_token: session.access_token.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(SESSION_LIFETIME_HOURS)).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::State(format!("failed to sign session token: {}", e)))
    }

    /// Verify a session token and recover the session. Any failure, bad
    /// signature, expiry, or garbage input, yields `Auth` and the caller
    /// treats the user as logged out.
    pub fn decode_session(&self, token: &str) -> Result<Session> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "session token rejected");
            AppError::Auth("Session expired".to_string())
        })?;
        Ok(Session {
            user_id: data.claims.sub,
            email: data.claims.email,
            username: data.claims.username,
            access_token: data.claims.access_token,
        })
    }

    /// Hand federated login to the backend by opening its OAuth entry URL in
    /// the system browser. No session is minted here; the user completes the
    /// flow in the browser.
    pub fn login_with_provider(&self, provider: &str) -> Result<()> {
        let base = std::env::var(OAUTH_URL_ENV)
            .map_err(|_| AppError::State(format!("{} is not configured", OAUTH_URL_ENV)))?;
        let url = format!("{}/{}", base.trim_end_matches('/'), provider);
        tracing::info!(provider = %provider, "opening federated login in browser");
        open::that(&url).map_err(|e| AppError::State(format!("failed to open browser: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::{AuthResponse, CreatorQuoteCount, Quote, QuoteBody, SortBy, TopVotedQuote, UserInfo};

    struct StubApi {
        login_result: Result<AuthResponse>,
    }

    #[async_trait]
    impl ApiService for StubApi {
        async fn register(
            &self,
            _username: String,
            _email: String,
            _password: String,
        ) -> Result<AuthResponse> {
            unimplemented!()
        }

        async fn login(&self, _identifier: String, _password: String) -> Result<AuthResponse> {
            self.login_result.clone()
        }

        async fn list_quotes(
            &self,
            _token: &str,
            _content: &str,
            _sort_by: SortBy,
        ) -> Result<Vec<Quote>> {
            unimplemented!()
        }

        async fn create_quote(&self, _token: &str, _body: QuoteBody) -> Result<()> {
            unimplemented!()
        }

        async fn update_quote(&self, _token: &str, _id: &str, _body: QuoteBody) -> Result<()> {
            unimplemented!()
        }

        async fn vote_quote(&self, _token: &str, _id: &str) -> Result<()> {
            unimplemented!()
        }

        async fn quotes_by_creator(&self, _token: &str) -> Result<Vec<CreatorQuoteCount>> {
            unimplemented!()
        }

        async fn top_voted_quotes(&self, _token: &str) -> Result<Vec<TopVotedQuote>> {
            unimplemented!()
        }
    }

    fn sample_session() -> Session {
        Session {
            user_id: "1".to_string(),
            email: "a@b.com".to_string(),
            username: "a".to_string(),
            access_token: "tok1".to_string(),
        }
    }

    #[test]
    fn test_session_token_round_trip() {
        let manager = SessionManager::with_secret("test-secret");
        let session = sample_session();
        let token = manager.encode_session(&session).unwrap();
        let recovered = manager.decode_session(&token).unwrap();
        assert_eq!(recovered, session);
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let minting = SessionManager::with_secret("secret-a");
        let verifying = SessionManager::with_secret("secret-b");
        let token = minting.encode_session(&sample_session()).unwrap();
        let err = verifying.decode_session(&token).unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let manager = SessionManager::with_secret("test-secret");
        assert!(manager.decode_session("not-a-token").unwrap_err().is_auth());
        assert!(manager.decode_session("").unwrap_err().is_auth());
    }

    #[tokio::test]
    async fn test_login_builds_session_from_response() {
        let api = StubApi {
            login_result: Ok(AuthResponse {
                user: UserInfo {
                    id: "1".to_string(),
                    email: "a@b.com".to_string(),
                    username: "a".to_string(),
                },
                access_token: "tok1".to_string(),
            }),
        };
        let manager = SessionManager::with_secret("test-secret");
        let session = manager
            .login(&api, "a".to_string(), "pw".to_string())
            .await
            .unwrap();
        assert_eq!(session, sample_session());
    }

    #[tokio::test]
    async fn test_login_failure_collapses_to_invalid_credentials() {
        for upstream in [
            AppError::Auth("user not found".to_string()),
            AppError::Http("network error: connection refused".to_string()),
        ] {
            let api = StubApi {
                login_result: Err(upstream),
            };
            let manager = SessionManager::with_secret("test-secret");
            let err = manager
                .login(&api, "a".to_string(), "pw".to_string())
                .await
                .unwrap_err();
            assert_eq!(err, AppError::Auth("Invalid credentials".to_string()));
        }
    }
}
