use jp_core::User;

/// Immutable snapshot of the authentication state.
///
/// Identity is present only while a token is present, and `loading` is true
/// only while a persisted token is being verified at startup. The
/// constructors are the only way to build one, so both hold everywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    identity: Option<User>,
    loading: bool,
}

impl Session {
    /// Before the persisted token has been read
    pub fn starting() -> Self {
        Self {
            token: None,
            identity: None,
            loading: true,
        }
    }

    /// Persisted token found, identity fetch in flight
    pub fn verifying(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            identity: None,
            loading: true,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            token: None,
            identity: None,
            loading: false,
        }
    }

    pub fn authenticated(token: impl Into<String>, identity: User) -> Self {
        Self {
            token: Some(token.into()),
            identity: Some(identity),
            loading: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.identity.is_some()
    }

    pub(crate) fn set_identity(&mut self, identity: User) {
        if self.token.is_some() {
            self.identity = Some(identity);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("identity", &self.identity)
            .field("loading", &self.loading)
            .finish()
    }
}
