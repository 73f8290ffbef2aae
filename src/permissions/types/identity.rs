use serde::{Deserialize, Serialize};

/// Minimal contract a requesting subject must expose to permission checks.
///
/// Leaf predicates only consult these already-loaded flags; no I/O happens
/// during a check.
pub trait Subject {
    /// True if the subject proved its identity.
    fn is_authenticated(&self) -> bool;
    /// True if the subject's account is active.
    fn is_active(&self) -> bool;
    /// True if the subject holds the superuser flag.
    fn is_superuser(&self) -> bool;
    /// True if the subject holds the staff flag.
    fn is_staff(&self) -> bool;
    /// Public key identifying the subject, used only for diagnostics.
    fn public_key(&self) -> Option<&str> {
        None
    }
}

/// Identity attached to an incoming request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestIdentity {
    pub public_key: Option<String>,
    pub authenticated: bool,
    pub active: bool,
    pub superuser: bool,
    pub staff: bool,
}

impl RequestIdentity {
    /// Creates an unauthenticated identity with no flags.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates an authenticated, active identity for the given public key.
    #[must_use]
    pub fn authenticated(public_key: impl Into<String>) -> Self {
        Self {
            public_key: Some(public_key.into()),
            authenticated: true,
            active: true,
            ..Self::default()
        }
    }

    /// Creates an authenticated, active staff identity.
    #[must_use]
    pub fn staff(public_key: impl Into<String>) -> Self {
        Self {
            staff: true,
            ..Self::authenticated(public_key)
        }
    }

    /// Creates an authenticated, active superuser identity.
    #[must_use]
    pub fn superuser(public_key: impl Into<String>) -> Self {
        Self {
            superuser: true,
            ..Self::authenticated(public_key)
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the staff flag.
    #[must_use]
    pub fn with_staff(mut self, staff: bool) -> Self {
        self.staff = staff;
        self
    }

    /// Sets the superuser flag.
    #[must_use]
    pub fn with_superuser(mut self, superuser: bool) -> Self {
        self.superuser = superuser;
        self
    }
}

impl Subject for RequestIdentity {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_superuser(&self) -> bool {
        self.superuser
    }

    fn is_staff(&self) -> bool {
        self.staff
    }

    fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }
}
