use crate::ApplicationStatus;

use std::str::FromStr;

#[test]
fn test_application_status_from_str() {
    assert_eq!(
        ApplicationStatus::from_str("shortlisted").unwrap(),
        ApplicationStatus::Shortlisted
    );
    assert_eq!(
        ApplicationStatus::from_str("rejected").unwrap(),
        ApplicationStatus::Rejected
    );
    assert_eq!(
        ApplicationStatus::from_str("viewed").unwrap(),
        ApplicationStatus::Viewed
    );
    assert!(ApplicationStatus::from_str("accepted").is_err());
}

#[test]
fn test_application_status_display_matches_wire_format() {
    assert_eq!(ApplicationStatus::Pending.to_string(), "pending");
    assert_eq!(
        serde_json::to_string(&ApplicationStatus::Shortlisted).unwrap(),
        "\"shortlisted\""
    );
}

#[test]
fn test_invalid_status_message_lists_allowed_values() {
    let err = ApplicationStatus::from_str("hired").unwrap_err();
    assert!(err.message().contains("shortlisted"));
    assert!(err.message().contains("hired"));
}
