//! Session Module
//!
//! Mock sign-in: the session store, the auth form buffer and their models.

pub mod form;
pub mod models;
pub mod store;

pub use form::AuthForm;
pub use models::{AuthMode, Credentials, User};
pub use store::SessionStore;
