use crate::JobDraft;

fn draft() -> JobDraft {
    JobDraft {
        title: "Backend Intern".into(),
        description: "Build APIs".into(),
        company: "Acme".into(),
        location: None,
        required_skills: vec!["rust".into()],
        experience_level: "Fresher".into(),
    }
}

#[test]
fn test_valid_draft_passes() {
    assert!(draft().validate().is_ok());
}

#[test]
fn test_draft_without_skills_rejected() {
    let job = JobDraft {
        required_skills: vec![" ".into()],
        ..draft()
    };
    assert!(job.validate().is_err());
}

#[test]
fn test_missing_location_not_serialized() {
    let json = serde_json::to_value(draft()).unwrap();
    assert!(json.get("location").is_none());
    assert_eq!(json["required_skills"][0], "rust");
}
