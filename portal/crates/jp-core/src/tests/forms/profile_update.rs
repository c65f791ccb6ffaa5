use crate::{EducationDetail, ProfileUpdate};

#[test]
fn test_empty_update_rejected() {
    let err = ProfileUpdate::default().validate().unwrap_err();
    assert_eq!(err.message(), "Nothing to update");
}

#[test]
fn test_with_skills_normalizes() {
    let update = ProfileUpdate::default().with_skills([" rust ", "", "sql"]);
    assert_eq!(
        update.skills,
        Some(vec!["rust".to_string(), "sql".to_string()])
    );
}

#[test]
fn test_unset_fields_not_serialized() {
    let update = ProfileUpdate {
        city_state: Some("Pune, MH".into()),
        ..ProfileUpdate::default()
    };
    let json = serde_json::to_value(&update).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert_eq!(json["city_state"], "Pune, MH");
}

#[test]
fn test_bad_link_rejected() {
    let update = ProfileUpdate {
        github_link: Some("github.com/ann".into()),
        ..ProfileUpdate::default()
    };
    assert!(update.validate().is_err());
}

#[test]
fn test_age_out_of_range_rejected() {
    let update = ProfileUpdate {
        age: Some(0),
        ..ProfileUpdate::default()
    };
    assert!(update.validate().is_err());
}

#[test]
fn test_incomplete_education_entry_rejected() {
    let update = ProfileUpdate {
        education_details: Some(vec![EducationDetail {
            degree: "B.Tech".into(),
            institute: "".into(),
            passing_year: "2024".into(),
        }]),
        ..ProfileUpdate::default()
    };
    assert!(update.validate().is_err());
}
