mod job_draft;
mod profile_update;
mod register_form;
mod reset_password_form;
mod resume_upload;
mod status_change;

use crate::parse_list;

#[test]
fn test_parse_list_trims_and_drops_empty() {
    assert_eq!(
        parse_list(" rust, sql ,, python ,"),
        vec!["rust".to_string(), "sql".into(), "python".into()]
    );
    assert!(parse_list("  ").is_empty());
}
