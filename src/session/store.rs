//! Mock authentication
//!
//! Any credentials that pass the presence checks are accepted. Nothing is
//! verified against an account store and no password is kept.

use super::models::{AuthMode, Credentials, User};
use crate::error::ValidationError;
use tracing::debug;

/// Current session: `None` when signed out.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    user: Option<User>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Signs in (or registers) with `credentials`, replacing any existing
    /// session. On failure the session is left as it was.
    pub fn login(
        &mut self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<&User, ValidationError> {
        let user = validate(mode, credentials)?;
        debug!(email = %user.email, ?mode, "Session started");
        Ok(&*self.user.insert(user))
    }

    /// Ends the session. Calling it while signed out is fine.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            debug!(email = %user.email, "Session ended");
        }
    }
}

/// Checks required fields and derives the display name.
pub fn validate(mode: AuthMode, credentials: &Credentials) -> Result<User, ValidationError> {
    let mut missing = Vec::new();
    if mode == AuthMode::Register && credentials.name.is_empty() {
        missing.push("name");
    }
    if credentials.email.is_empty() {
        missing.push("email");
    }
    if credentials.password.is_empty() {
        missing.push("password");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let name = if credentials.name.is_empty() {
        email_local_part(&credentials.email).to_string()
    } else {
        credentials.name.clone()
    };

    Ok(User {
        name,
        email: credentials.email.clone(),
    })
}

/// Everything before the first `@`, or the whole address if there is none.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
