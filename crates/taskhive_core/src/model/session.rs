//! Session context value.
//!
//! # Responsibility
//! - Carry authenticated-user identity as an explicit value instead of
//!   ambient global state.
//!
//! # Invariants
//! - Core never reads session state from globals; callers pass a `Session`
//!   to the components that need one (currently the remote store).

use serde::{Deserialize, Serialize};

/// Authenticated-user context injected into the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Account email as reported by the auth callback.
    pub email: String,
    /// Bearer token attached to remote calls when present.
    pub access_token: Option<String>,
}

impl Session {
    /// Creates an anonymous-read session without credentials.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            access_token: None,
        }
    }

    /// Attaches a bearer token for authenticated remote calls.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}
