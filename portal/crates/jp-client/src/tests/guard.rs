use crate::tests::user;
use crate::{Access, AuthGuard, GuardDecision, Route, Session, View};

use jp_core::Role;

const ALL_ROUTES: [Route; 13] = [
    Route::Home,
    Route::Login,
    Route::Register,
    Route::ForgotPassword,
    Route::ResetPassword,
    Route::Dashboard,
    Route::Profile,
    Route::Resume,
    Route::Jobs,
    Route::MyApplications,
    Route::Chat,
    Route::TeacherJobs,
    Route::Applicants,
];

#[test]
fn test_loading_session_is_pending_everywhere() {
    for session in [Session::starting(), Session::verifying("tok")] {
        for route in ALL_ROUTES {
            assert_eq!(AuthGuard::evaluate(route, &session), GuardDecision::Pending);
        }
    }
}

#[test]
fn test_anonymous_is_redirected_from_protected_routes() {
    let session = Session::anonymous();

    for route in ALL_ROUTES {
        let decision = AuthGuard::evaluate(route, &session);
        match route.access() {
            Access::Protected | Access::RoleOnly(_) => {
                assert_eq!(decision, GuardDecision::Redirect(Route::Login), "{route}")
            }
            Access::Public | Access::Entry => {
                assert!(matches!(decision, GuardDecision::Render(_)), "{route}")
            }
        }
    }
}

#[test]
fn test_dashboard_view_follows_role() {
    let student = Session::authenticated("tok", user("Ann", Role::Student));
    let teacher = Session::authenticated("tok", user("Tom", Role::Teacher));

    assert_eq!(
        AuthGuard::evaluate(Route::Dashboard, &student),
        GuardDecision::Render(View::StudentDashboard)
    );
    assert_eq!(
        AuthGuard::evaluate(Route::Dashboard, &teacher),
        GuardDecision::Render(View::TeacherDashboard)
    );
}

#[test]
fn test_authenticated_is_redirected_from_entry_views() {
    let session = Session::authenticated("tok", user("Ann", Role::Student));

    assert_eq!(
        AuthGuard::evaluate(Route::Login, &session),
        GuardDecision::Redirect(Route::Dashboard)
    );
    assert_eq!(
        AuthGuard::evaluate(Route::Register, &session),
        GuardDecision::Redirect(Route::Dashboard)
    );
}

#[test]
fn test_public_routes_render_for_everyone() {
    let signed_in = Session::authenticated("tok", user("Ann", Role::Student));

    for session in [Session::anonymous(), signed_in] {
        assert_eq!(
            AuthGuard::evaluate(Route::ResetPassword, &session),
            GuardDecision::Render(View::ResetPassword)
        );
        assert_eq!(
            AuthGuard::evaluate(Route::Home, &session),
            GuardDecision::Render(View::Home)
        );
    }
}

#[test]
fn test_role_only_routes_send_other_role_to_dashboard() {
    let student = Session::authenticated("tok", user("Ann", Role::Student));
    let teacher = Session::authenticated("tok", user("Tom", Role::Teacher));

    assert_eq!(
        AuthGuard::evaluate(Route::Applicants, &student),
        GuardDecision::Redirect(Route::Dashboard)
    );
    assert_eq!(
        AuthGuard::evaluate(Route::Resume, &teacher),
        GuardDecision::Redirect(Route::Dashboard)
    );
    assert_eq!(
        AuthGuard::evaluate(Route::TeacherJobs, &teacher),
        GuardDecision::Render(View::TeacherJobs)
    );
    assert_eq!(
        AuthGuard::evaluate(Route::Jobs, &teacher),
        GuardDecision::Render(View::Jobs)
    );
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::Dashboard.path(), "/dashboard");
    assert_eq!(Route::Login.to_string(), "/login");
}
