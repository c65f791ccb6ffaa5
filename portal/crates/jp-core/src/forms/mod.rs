//! Validated request payloads.
//!
//! Every form is checked with `validate()` before it is serialized, so the
//! backend only ever sees well-formed field sets.

pub mod chat_message;
pub mod forgot_password_form;
pub mod job_draft;
pub mod profile_update;
pub mod register_form;
pub mod reset_password_form;
pub mod resume_upload;
pub mod status_change;

use crate::{CoreError, Result as CoreErrorResult};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[track_caller]
pub(crate) fn require(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

#[track_caller]
pub(crate) fn validate_email(email: &str) -> CoreErrorResult<()> {
    require("Email", email)?;

    let valid = email
        .trim()
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        });

    if !valid {
        return Err(CoreError::validation("Please enter a valid email address"));
    }
    Ok(())
}

#[track_caller]
pub(crate) fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[track_caller]
pub(crate) fn validate_link(field: &str, link: Option<&str>) -> CoreErrorResult<()> {
    if let Some(link) = link
        && !link.is_empty()
        && !(link.starts_with("http://") || link.starts_with("https://"))
    {
        return Err(CoreError::validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}
