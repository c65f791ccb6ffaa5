use crate::guard::{Access, Route};
use crate::session::Session;

use jp_core::Role;

/// What a screen shows once the guard lets it through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    StudentDashboard,
    TeacherDashboard,
    Profile,
    Resume,
    Jobs,
    MyApplications,
    Chat,
    TeacherJobs,
    Applicants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading: show a neutral indicator, decide later
    Pending,
    Render(View),
    Redirect(Route),
}

/// Navigation gate, recomputed for every route transition.
///
/// Unauthenticated users are sent to the login entry point (the requested
/// route is not remembered); authenticated users are kept off the entry views.
pub struct AuthGuard;

impl AuthGuard {
    pub fn evaluate(route: Route, session: &Session) -> GuardDecision {
        if session.loading() {
            return GuardDecision::Pending;
        }

        let role = session.identity().map(|user| user.role);

        match (route.access(), role) {
            (Access::Public, _) => GuardDecision::Render(Self::view(route, role)),
            (Access::Entry, Some(_)) => GuardDecision::Redirect(Route::Dashboard),
            (Access::Entry, None) => GuardDecision::Render(Self::view(route, role)),
            (Access::Protected | Access::RoleOnly(_), None) => {
                GuardDecision::Redirect(Route::Login)
            }
            (Access::Protected, Some(_)) => GuardDecision::Render(Self::view(route, role)),
            (Access::RoleOnly(required), Some(actual)) if required == actual => {
                GuardDecision::Render(Self::view(route, role))
            }
            (Access::RoleOnly(_), Some(_)) => GuardDecision::Redirect(Route::Dashboard),
        }
    }

    fn view(route: Route, role: Option<Role>) -> View {
        match route {
            Route::Home => View::Home,
            Route::Login => View::Login,
            Route::Register => View::Register,
            Route::ForgotPassword => View::ForgotPassword,
            Route::ResetPassword => View::ResetPassword,
            Route::Dashboard => match role {
                Some(Role::Teacher) => View::TeacherDashboard,
                _ => View::StudentDashboard,
            },
            Route::Profile => View::Profile,
            Route::Resume => View::Resume,
            Route::Jobs => View::Jobs,
            Route::MyApplications => View::MyApplications,
            Route::Chat => View::Chat,
            Route::TeacherJobs => View::TeacherJobs,
            Route::Applicants => View::Applicants,
        }
    }
}
