use crate::{CoreError, Result as CoreErrorResult};

/// Transient login input. Never persisted, never logged.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.email.trim().is_empty() {
            return Err(CoreError::validation("Email is required"));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation("Password is required"));
        }
        Ok(())
    }

    /// OAuth2 password-form fields; the backend expects the email as `username`.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("username", self.email.trim()),
            ("password", self.password.as_str()),
        ]
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
