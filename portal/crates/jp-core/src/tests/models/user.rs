use crate::{Role, User};

#[test]
fn test_partial_profile_deserializes_with_defaults() {
    let user: User = serde_json::from_str(r#"{"first_name":"Ann","role":"student"}"#).unwrap();

    assert_eq!(user.first_name, "Ann");
    assert_eq!(user.role, Role::Student);
    assert!(user.id.is_none());
    assert!(user.email.is_empty());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let user: User = serde_json::from_str(
        r#"{"id":7,"first_name":"Bo","last_name":"Li","email":"bo@x.com","role":"teacher","phone":"1","skills":["rust"]}"#,
    )
    .unwrap();

    assert_eq!(user.id, Some(7));
    assert!(user.is_teacher());
    assert_eq!(user.full_name(), "Bo Li");
}

#[test]
fn test_full_name_without_last_name_is_trimmed() {
    let user = User {
        first_name: "Ann".into(),
        ..User::default()
    };
    assert_eq!(user.full_name(), "Ann");
}
