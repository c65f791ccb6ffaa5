use crate::forms::{require, validate_email, validate_password};
use crate::{Result as CoreErrorResult, Role};

use serde::Serialize;

/// New account fields sent as JSON to the registration endpoint
#[derive(Clone, Serialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require("First name", &self.first_name)?;
        require("Last name", &self.last_name)?;
        validate_email(&self.email)?;
        require("Phone number", &self.phone)?;
        validate_password(&self.password)?;
        Ok(())
    }
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
