use jp_core::Role;

/// Navigation targets. Each CLI screen names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    Profile,
    Resume,
    Jobs,
    MyApplications,
    Chat,
    TeacherJobs,
    Applicants,
}

/// Who may see a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Rendered for everyone once the session is resolved
    Public,
    /// Login and registration; authenticated users are sent to the dashboard
    Entry,
    /// Any authenticated user
    Protected,
    /// Authenticated users with this role
    RoleOnly(Role),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::ResetPassword => "/reset-password",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/dashboard/profile",
            Route::Resume => "/dashboard/resume",
            Route::Jobs => "/dashboard/jobs",
            Route::MyApplications => "/dashboard/applications",
            Route::Chat => "/dashboard/chat",
            Route::TeacherJobs => "/dashboard/teacher/jobs",
            Route::Applicants => "/dashboard/teacher/applicants",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Home | Route::ForgotPassword | Route::ResetPassword => Access::Public,
            Route::Login | Route::Register => Access::Entry,
            Route::Dashboard | Route::Jobs | Route::Chat => Access::Protected,
            Route::Profile | Route::Resume | Route::MyApplications => {
                Access::RoleOnly(Role::Student)
            }
            Route::TeacherJobs | Route::Applicants => Access::RoleOnly(Role::Teacher),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
