use crate::{RegisterForm, Role};

fn valid_form() -> RegisterForm {
    RegisterForm {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email: "ann@uni.edu".into(),
        phone: "+1 234 567 890".into(),
        password: "secret123".into(),
        role: Role::Student,
    }
}

#[test]
fn test_valid_register_form_passes() {
    assert!(valid_form().validate().is_ok());
}

#[test]
fn test_short_password_rejected() {
    let form = RegisterForm {
        password: "short".into(),
        ..valid_form()
    };
    let err = form.validate().unwrap_err();
    assert_eq!(err.message(), "Password must be at least 8 characters");
}

#[test]
fn test_email_without_domain_rejected() {
    for email in ["ann", "ann@", "@uni.edu", "a@b@c"] {
        let form = RegisterForm {
            email: email.into(),
            ..valid_form()
        };
        assert!(form.validate().is_err(), "{email} should be rejected");
    }
}

#[test]
fn test_blank_required_field_names_the_field() {
    let form = RegisterForm {
        phone: "   ".into(),
        ..valid_form()
    };
    assert_eq!(form.validate().unwrap_err().message(), "Phone number is required");
}

#[test]
fn test_register_form_serializes_role_and_hides_password_in_debug() {
    let form = RegisterForm {
        role: Role::Teacher,
        ..valid_form()
    };
    let json = serde_json::to_value(&form).unwrap();

    assert_eq!(json["role"], "teacher");
    assert_eq!(json["password"], "secret123");
    assert!(!format!("{form:?}").contains("secret123"));
}
