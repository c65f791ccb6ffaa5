use crate::{ApplicationStatus, StatusChange};

#[test]
fn test_query_pairs_include_reason_when_given() {
    let change = StatusChange::new(ApplicationStatus::Rejected, Some("Missing SQL".into()));
    assert_eq!(
        change.query_pairs(),
        vec![
            ("status", "rejected".to_string()),
            ("reason", "Missing SQL".to_string())
        ]
    );
}

#[test]
fn test_blank_reason_dropped() {
    let change = StatusChange::new(ApplicationStatus::Shortlisted, Some("  ".into()));
    assert!(change.reason.is_none());
    assert_eq!(change.query_pairs().len(), 1);
}
