//! Client session state
//!
//! Explicit session object replacing ad hoc global credential storage:
//! login populates it, logout clears it, and any 401 response clears it
//! through [`Session::mark_expired`]. The bearer token is opaque to the
//! client; it is cached here and attached to every backend request.

use std::sync::RwLock;

use crate::models::user::UserProfile;

#[derive(Debug, Default)]
pub struct Session {
    inner: RwLock<SessionInner>,
}

#[derive(Debug, Default)]
struct SessionInner {
    token: Option<String>,
    profile: Option<UserProfile>,
    expired: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the session after a successful login.
    pub fn login(&self, token: impl Into<String>, profile: UserProfile) {
        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.token = Some(token.into());
        inner.profile = Some(profile);
        inner.expired = false;
    }

    /// Clear credentials and the cached profile.
    pub fn logout(&self) {
        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.token = None;
        inner.profile = None;
        inner.expired = false;
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().expect("session lock poisoned").token.clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.inner.read().expect("session lock poisoned").profile.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().expect("session lock poisoned").token.is_some()
    }

    /// Set after a 401; the embedding shell watches this to force a
    /// navigation to the login view.
    pub fn is_expired(&self) -> bool {
        self.inner.read().expect("session lock poisoned").expired
    }

    /// Invoked by the API gateway on a 401 response. Credentials are
    /// dropped so no further request goes out with a stale token.
    pub(crate) fn mark_expired(&self) {
        let mut inner = self.inner.write().expect("session lock poisoned");
        inner.token = None;
        inner.profile = None;
        inner.expired = true;
    }
}
