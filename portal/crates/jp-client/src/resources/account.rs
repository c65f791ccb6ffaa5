use crate::client::ApiRequest;
use crate::{ClientResult, SessionStore};

use jp_core::{Ack, ForgotPasswordForm, RegisterForm, ResetPasswordForm, User};
use log::info;

impl SessionStore {
    /// Create an account. Never carries a token.
    pub async fn register(&self, form: &RegisterForm) -> ClientResult<User> {
        form.validate()?;

        let request = ApiRequest::post("/auth/register")
            .anonymous()
            .json(form)?
            .failure_message("Registration failed");

        let user: User = self.dispatch(request).await?;
        info!("Registered {} as {}", user.email, user.role);
        Ok(user)
    }

    /// Ask the backend to email a reset link
    pub async fn forgot_password(&self, form: &ForgotPasswordForm) -> ClientResult<Ack> {
        form.validate()?;

        let request = ApiRequest::post("/auth/forgot-password")
            .anonymous()
            .json(form)?
            .failure_message("Failed to send reset link");

        self.dispatch(request).await
    }

    pub async fn reset_password(&self, form: &ResetPasswordForm) -> ClientResult<Ack> {
        form.validate()?;

        let request = ApiRequest::post("/auth/reset-password")
            .anonymous()
            .json(form)?
            .failure_message("Failed to reset password");

        self.dispatch(request).await
    }
}
