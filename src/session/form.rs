//! Auth form buffer
//!
//! Holds what the user typed until a submit succeeds. A rejected submit
//! keeps the fields so the user can correct them.

use super::{
    models::{AuthMode, Credentials, User},
    store::SessionStore,
};
use crate::error::ValidationError;

#[derive(Debug, Default, Clone)]
pub struct AuthForm {
    mode: AuthMode,
    fields: Credentials,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn fields(&self) -> &Credentials {
        &self.fields
    }

    /// Replaces the typed-in fields.
    pub fn fill(&mut self, fields: Credentials) {
        self.fields = fields;
    }

    /// Switches between login and registration, clearing the fields.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.fields = Credentials::default();
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        if mode != self.mode {
            self.toggle_mode();
        }
    }

    /// Submits the form against `session`, clearing it on success.
    pub fn submit(&mut self, session: &mut SessionStore) -> Result<User, ValidationError> {
        let user = session.login(self.mode, &self.fields)?.clone();
        self.fields = Credentials::default();
        Ok(user)
    }
}
