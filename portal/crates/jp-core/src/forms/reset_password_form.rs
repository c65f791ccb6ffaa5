use crate::forms::validate_password;
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Consumes a reset token from the password-reset email.
///
/// `confirm_password` stays on the client; only `token` and `new_password`
/// are serialized.
#[derive(Clone, Serialize)]
pub struct ResetPasswordForm {
    pub token: String,
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl ResetPasswordForm {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.token.trim().is_empty() {
            return Err(CoreError::validation("Invalid reset link"));
        }
        if self.new_password != self.confirm_password {
            return Err(CoreError::validation("Passwords do not match"));
        }
        validate_password(&self.new_password)
    }
}

impl std::fmt::Debug for ResetPasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordForm")
            .field("token", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}
