use crate::Result as CoreErrorResult;
use crate::forms::validate_email;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        validate_email(&self.email)
    }
}
