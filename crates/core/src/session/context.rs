//! Session context
//!
//! The context is built once a session is established and handed to the
//! components that need it through a shared [`SessionHandle`]. Logging out
//! invalidates it in place, so every holder observes the change.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use travelgate_domain::Role;

/// Identity of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    token: Option<String>,
    subject: Option<String>,
    full_name: Option<String>,
    /// Realm roles merged with every client's roles, raw names.
    roles: BTreeSet<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionContext {
    /// Session with a bearer token and its merged role names.
    pub fn new<I, S>(token: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token: Some(token.into()),
            roles: roles.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// No token and no roles.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Every role name carried by the token, including ones this client
    /// does not recognize.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    /// Roles this client knows how to act on.
    pub fn roles(&self) -> Vec<Role> {
        Role::ALL.into_iter().filter(|role| self.has_role(*role)).collect()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role.to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the token expired at `now`; sessions without expiry never do.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    /// Drop the token and every role.
    pub fn invalidate(&mut self) {
        *self = Self::anonymous();
    }
}

/// Shared, swappable session.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<SessionContext>>,
}

impl SessionHandle {
    pub fn new(context: SessionContext) -> Self {
        Self { inner: Arc::new(RwLock::new(context)) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Copy of the current context.
    pub fn snapshot(&self) -> SessionContext {
        self.inner.read().clone()
    }

    /// Current bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.inner.read().has_role(role)
    }

    pub fn replace(&self, context: SessionContext) {
        *self.inner.write() = context;
    }

    pub fn invalidate(&self) {
        self.inner.write().invalidate();
    }
}
