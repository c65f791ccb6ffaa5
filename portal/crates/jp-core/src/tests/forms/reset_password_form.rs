use crate::ResetPasswordForm;

fn form(token: &str, new: &str, confirm: &str) -> ResetPasswordForm {
    ResetPasswordForm {
        token: token.into(),
        new_password: new.into(),
        confirm_password: confirm.into(),
    }
}

#[test]
fn test_missing_token_is_invalid_link() {
    let err = form("", "newpass123", "newpass123").validate().unwrap_err();
    assert_eq!(err.message(), "Invalid reset link");
}

#[test]
fn test_mismatched_passwords_rejected() {
    let err = form("tok", "newpass123", "newpass124").validate().unwrap_err();
    assert_eq!(err.message(), "Passwords do not match");
}

#[test]
fn test_short_password_rejected() {
    assert!(form("tok", "short", "short").validate().is_err());
}

#[test]
fn test_confirm_password_not_serialized() {
    let json = serde_json::to_value(form("tok", "newpass123", "newpass123")).unwrap();

    assert_eq!(json["token"], "tok");
    assert_eq!(json["new_password"], "newpass123");
    assert!(json.get("confirm_password").is_none());
}
