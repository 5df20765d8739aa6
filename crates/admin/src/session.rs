use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::error::{AdminError, Result};

/// Expected admin login, checked verbatim against submitted credentials.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Opaque bearer token handed out on login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tracks live admin sessions. Cloning shares the session set.
#[derive(Debug, Clone)]
pub struct SessionManager {
    credentials: Arc<AdminCredentials>,
    sessions: Arc<RwLock<HashSet<SessionToken>>>,
}

impl SessionManager {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            sessions: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Checks the submitted credentials and mints a session token.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionToken> {
        if username != self.credentials.username || password != self.credentials.password {
            metrics::counter!("admin_login_failures").increment(1);
            tracing::warn!(username, "rejected admin login");
            return Err(AdminError::InvalidCredentials);
        }
        let token = SessionToken::mint();
        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(token);
        tracing::info!("admin logged in");
        Ok(token)
    }

    pub fn is_logged_in(&self, token: SessionToken) -> bool {
        self.sessions
            .read()
            .expect("session lock poisoned")
            .contains(&token)
    }

    /// Errors unless the token belongs to a live session.
    pub fn require(&self, token: Option<SessionToken>) -> Result<SessionToken> {
        match token {
            Some(token) if self.is_logged_in(token) => Ok(token),
            _ => Err(AdminError::NotAuthenticated),
        }
    }

    /// Ends the session. Unknown tokens are a no-op.
    pub fn logout(&self, token: SessionToken) -> bool {
        self.sessions
            .write()
            .expect("session lock poisoned")
            .remove(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        SessionManager::new(AdminCredentials::new("admin", "admin123"))
    }

    #[test]
    fn login_with_correct_credentials_mints_token() {
        let manager = manager();
        let token = manager.login("admin", "admin123").unwrap();
        assert!(manager.is_logged_in(token));
    }

    #[test]
    fn login_rejects_wrong_password() {
        let manager = manager();
        let err = manager.login("admin", "wrong").unwrap_err();
        assert!(matches!(err, AdminError::InvalidCredentials));
    }

    #[test]
    fn require_rejects_missing_and_stale_tokens() {
        let manager = manager();
        assert!(matches!(
            manager.require(None),
            Err(AdminError::NotAuthenticated)
        ));

        let token = manager.login("admin", "admin123").unwrap();
        assert!(manager.require(Some(token)).is_ok());

        assert!(manager.logout(token));
        assert!(matches!(
            manager.require(Some(token)),
            Err(AdminError::NotAuthenticated)
        ));
    }

    #[test]
    fn logout_of_unknown_token_is_noop() {
        let manager = manager();
        let token = SessionToken::parse("6a54ff79-14d8-4f9e-8ecb-89adf1b0ebd2").unwrap();
        assert!(!manager.logout(token));
    }

    #[test]
    fn tokens_round_trip_through_display() {
        let manager = manager();
        let token = manager.login("admin", "admin123").unwrap();
        let parsed = SessionToken::parse(&token.to_string()).unwrap();
        assert_eq!(parsed, token);
    }
}
