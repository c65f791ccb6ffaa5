use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Student.as_str(), "student");
    assert_eq!(Role::Teacher.as_str(), "teacher");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert_eq!(Role::from_str("teacher").unwrap(), Role::Teacher);
    assert!(Role::from_str("Teacher").is_err());
    assert!(Role::from_str("admin").is_err());
}

#[test]
fn test_role_default() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn test_role_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
    let role: Role = serde_json::from_str("\"student\"").unwrap();
    assert_eq!(role, Role::Student);
}
