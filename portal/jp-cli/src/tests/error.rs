use crate::{CliError, NOT_LOGGED_IN_MESSAGE};

use jp_client::{ClientError, Route};
use jp_core::Role;

#[test]
fn test_not_logged_in_message() {
    assert_eq!(
        CliError::NotLoggedIn.user_message(),
        "Not logged in. Run `jobportal login` first."
    );
    assert_eq!(CliError::NotLoggedIn.user_message(), NOT_LOGGED_IN_MESSAGE);
}

#[test]
fn test_already_logged_in_message() {
    let err = CliError::AlreadyLoggedIn {
        email: "user@x.com".into(),
    };

    assert_eq!(err.user_message(), "Already logged in as user@x.com.");
}

#[test]
fn test_wrong_role_names_route() {
    let err = CliError::WrongRole {
        route: Route::Applicants,
        role: Role::Student,
    };

    assert_eq!(
        err.user_message(),
        "/dashboard/teacher/applicants is not available to student accounts."
    );
}

#[test]
fn test_client_error_uses_client_message() {
    let err = CliError::from(ClientError::api(400, "Only students can apply for jobs"));

    assert_eq!(err.user_message(), "Only students can apply for jobs");
}

#[test]
fn test_core_error_becomes_input_error() {
    let core = "admin".parse::<Role>().unwrap_err();

    let err = CliError::from(core);

    assert!(matches!(err, CliError::Client(ClientError::Input { .. })));
}
