//! Signed-in user context.
//!
//! Identity comes from an external auth provider. The session is passed
//! explicitly to every backend call instead of living in global state: it is
//! filled at sign-in and emptied at sign-out.

use tracing::debug;

use crate::error::{StudioError, StudioResult};

/// An authenticated user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// The current session; empty until someone signs in.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// An empty (signed-out) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already holding the given user.
    pub fn signed_in(user: User) -> Self {
        let mut session = Self::new();
        session.sign_in(user);
        session
    }

    /// Build a session from an optional user id, treating blank ids as absent.
    pub fn from_user_id(user_id: Option<&str>) -> Self {
        match user_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => Self::signed_in(User::new(id)),
            None => Self::new(),
        }
    }

    pub fn sign_in(&mut self, user: User) {
        debug!(user_id = %user.id, "Signed in");
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            debug!(user_id = %user.id, "Signed out");
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.require_user().is_ok()
    }

    /// The signed-in user, or `MissingUserId` when there is none.
    ///
    /// Every backend call goes through this before a request is built.
    pub fn require_user(&self) -> StudioResult<&User> {
        match &self.user {
            Some(user) if !user.id.trim().is_empty() => Ok(user),
            _ => Err(StudioError::MissingUserId),
        }
    }
}
