use crate::models::timestamp;
use crate::{Application, Job, MyApplication};

use chrono::{TimeZone, Utc};

fn job_json(created_at: &str) -> String {
    format!(
        r#"{{"id":3,"title":"Backend Intern","description":"APIs","company":"Acme",
            "experience_level":"Fresher","teacher_id":9,"created_at":"{created_at}"}}"#
    )
}

#[test]
fn test_job_with_offset_timestamp_decodes() {
    let job: Job = serde_json::from_str(&job_json("2024-05-01T10:00:00.123456+00:00")).unwrap();

    assert_eq!(
        job.created_at.timestamp_micros(),
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap().timestamp_micros() + 123_456
    );
}

#[test]
fn test_job_with_naive_timestamp_is_read_as_utc() {
    let job: Job = serde_json::from_str(&job_json("2024-05-01T10:00:00")).unwrap();

    assert_eq!(job.created_at, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
}

#[test]
fn test_non_utc_offset_is_normalized() {
    let parsed = timestamp::parse("2024-05-01T15:30:00+05:30").unwrap();

    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
}

#[test]
fn test_garbage_timestamp_is_rejected() {
    let result = serde_json::from_str::<Job>(&job_json("yesterday"));

    assert!(result.unwrap_err().to_string().contains("invalid timestamp"));
}

#[test]
fn test_my_application_with_offset_timestamp_decodes() {
    let application: MyApplication = serde_json::from_str(
        r#"{"id":1,"job_id":3,"job_title":"Backend Intern","company":"Acme",
            "status":"pending","applied_at":"2024-05-02T08:00:00+00:00"}"#,
    )
    .unwrap();

    assert_eq!(
        application.applied_at,
        Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap()
    );
}

#[test]
fn test_application_timestamp_may_be_null_or_missing() {
    let null: Application =
        serde_json::from_str(r#"{"id":1,"job_id":3,"student_id":4,"applied_at":null}"#).unwrap();
    let missing: Application =
        serde_json::from_str(r#"{"id":1,"job_id":3,"student_id":4}"#).unwrap();
    let offset: Application = serde_json::from_str(
        r#"{"id":1,"job_id":3,"student_id":4,"applied_at":"2024-05-02T08:00:00+00:00"}"#,
    )
    .unwrap();

    assert!(null.applied_at.is_none());
    assert!(missing.applied_at.is_none());
    assert!(offset.applied_at.is_some());
}
