use crate::Credentials;

#[test]
fn test_credentials_form_fields_use_username_key() {
    let creds = Credentials::new(" user@x.com ", "secret123");
    let fields = creds.form_fields();

    assert_eq!(fields[0], ("username", "user@x.com"));
    assert_eq!(fields[1], ("password", "secret123"));
}

#[test]
fn test_credentials_debug_redacts_password() {
    let creds = Credentials::new("user@x.com", "secret123");
    let debug = format!("{creds:?}");

    assert!(debug.contains("user@x.com"));
    assert!(!debug.contains("secret123"));
}

#[test]
fn test_credentials_validate_requires_both_fields() {
    assert!(Credentials::new("", "secret123").validate().is_err());
    assert!(Credentials::new("user@x.com", "").validate().is_err());
    assert!(Credentials::new("user@x.com", "x").validate().is_ok());
}
