use crate::{
    CliError, CliResult, commands::Commands, job_commands::JobCommands,
    profile_commands::ProfileCommands, resume_commands::ResumeCommands,
    teacher_commands::TeacherCommands,
};

use std::path::Path;

use jp_client::{Access, ClientError, GuardDecision, Route, SessionStore, View};
use jp_core::{
    ApplicationStatus, ChatMessage, Credentials, ForgotPasswordForm, JobDraft, ProfileUpdate,
    RegisterForm, ResetPasswordForm, ResumeUpload, Role, StatusChange, parse_list,
};
use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// The screen a command opens; the guard is asked about it before anything runs.
pub fn route_for(command: &Commands) -> Option<Route> {
    match command {
        Commands::Login { .. } => Some(Route::Login),
        Commands::Logout => None,
        Commands::Whoami => Some(Route::Dashboard),
        Commands::Register { .. } => Some(Route::Register),
        Commands::ForgotPassword { .. } => Some(Route::ForgotPassword),
        Commands::ResetPassword { .. } => Some(Route::ResetPassword),
        Commands::Profile { .. } => Some(Route::Profile),
        Commands::Resume { .. } => Some(Route::Resume),
        Commands::Jobs { action } => match action {
            JobCommands::MyApplications => Some(Route::MyApplications),
            _ => Some(Route::Jobs),
        },
        Commands::Teacher { action } => match action {
            TeacherCommands::Jobs | TeacherCommands::PostJob { .. } => Some(Route::TeacherJobs),
            TeacherCommands::Applicants { .. } | TeacherCommands::SetStatus { .. } => {
                Some(Route::Applicants)
            }
        },
        Commands::Chat { .. } => Some(Route::Chat),
    }
}

/// Map a guard decision to the view to show or the message to print instead
pub fn authorize(store: &SessionStore, route: Route) -> CliResult<View> {
    match store.guard(route) {
        GuardDecision::Render(view) => Ok(view),
        GuardDecision::Pending => Err(CliError::Pending),
        GuardDecision::Redirect(Route::Login) => Err(CliError::NotLoggedIn),
        GuardDecision::Redirect(_) => {
            let session = store.snapshot();
            match session.identity() {
                Some(user) if route.access() == Access::Entry => Err(CliError::AlreadyLoggedIn {
                    email: user.email.clone(),
                }),
                Some(user) => Err(CliError::WrongRole {
                    route,
                    role: user.role,
                }),
                None => Err(CliError::NotLoggedIn),
            }
        }
    }
}

/// Run one command against an initialized session store
pub async fn run(command: Commands, store: &SessionStore) -> CliResult<Value> {
    store.wait_resolved().await;

    let route = route_for(&command);
    let view = match route {
        Some(route) => Some(authorize(store, route)?),
        None => None,
    };
    debug!("Guard passed for {route:?}: {view:?}");

    match command {
        Commands::Login { email, password } => {
            let user = store.login(&Credentials::new(email, password)).await?;
            Ok(json!({
                "message": format!("Logged in as {}", user.email),
                "user": user,
            }))
        }
        Commands::Logout => {
            store.logout()?;
            Ok(json!({ "message": "Logged out" }))
        }
        Commands::Whoami => {
            let session = store.snapshot();
            let dashboard = match view {
                Some(View::TeacherDashboard) => Role::Teacher,
                _ => Role::Student,
            };
            Ok(json!({
                "dashboard": dashboard,
                "user": session.identity(),
            }))
        }
        Commands::Register {
            first_name,
            last_name,
            email,
            phone,
            password,
            role,
        } => {
            let form = RegisterForm {
                first_name,
                last_name,
                email,
                phone,
                password,
                role: role.parse::<Role>()?,
            };
            let user = store.register(&form).await?;
            Ok(json!({
                "message": "Registration successful. Please log in.",
                "user": user,
            }))
        }
        Commands::ForgotPassword { email } => {
            to_json(&store.forgot_password(&ForgotPasswordForm { email }).await?)
        }
        Commands::ResetPassword {
            token,
            new_password,
            confirm_password,
        } => {
            let form = ResetPasswordForm {
                token,
                new_password,
                confirm_password,
            };
            to_json(&store.reset_password(&form).await?)
        }
        Commands::Profile { action } => run_profile(action, store).await,
        Commands::Resume { action } => run_resume(action, store).await,
        Commands::Jobs { action } => run_jobs(action, store).await,
        Commands::Teacher { action } => run_teacher(action, store).await,
        Commands::Chat {
            message,
            session_id,
        } => to_json(&store.chat(&ChatMessage { message, session_id }).await?),
    }
}

async fn run_profile(action: ProfileCommands, store: &SessionStore) -> CliResult<Value> {
    match action {
        ProfileCommands::Show => to_json(&store.profile().await?),
        ProfileCommands::Update {
            age,
            education,
            skills,
            preferred_job_role,
            experience_level,
            city_state,
            github_link,
            linkedin_link,
            fresher_status,
            availability,
            work_authorization,
            expected_salary,
        } => {
            let update = ProfileUpdate {
                age,
                education,
                skills: skills.as_deref().map(parse_list),
                preferred_job_role,
                experience_level,
                city_state,
                github_link,
                linkedin_link,
                fresher_status,
                availability,
                work_authorization,
                expected_salary,
                ..ProfileUpdate::default()
            };
            to_json(&store.update_profile(&update).await?)
        }
    }
}

async fn run_resume(action: ResumeCommands, store: &SessionStore) -> CliResult<Value> {
    match action {
        ResumeCommands::Upload { path } => {
            let upload = read_resume(&path)?;
            to_json(&store.upload_resume(upload).await?)
        }
    }
}

async fn run_jobs(action: JobCommands, store: &SessionStore) -> CliResult<Value> {
    match action {
        JobCommands::List => to_json(&store.list_jobs().await?),
        JobCommands::Recommendations => to_json(&store.recommended_jobs().await?),
        JobCommands::Apply { job_id } => to_json(&store.apply(job_id).await?),
        JobCommands::MyApplications => to_json(&store.my_applications().await?),
        JobCommands::Analyze { job_id } => to_json(&store.analyze_resume(job_id).await?),
    }
}

async fn run_teacher(action: TeacherCommands, store: &SessionStore) -> CliResult<Value> {
    match action {
        TeacherCommands::Jobs => to_json(&store.posted_jobs().await?),
        TeacherCommands::PostJob {
            title,
            description,
            company,
            location,
            skills,
            experience_level,
        } => {
            let draft = JobDraft {
                title,
                description,
                company,
                location,
                required_skills: parse_list(&skills),
                experience_level,
            };
            to_json(&store.post_job(&draft).await?)
        }
        TeacherCommands::Applicants { job_id } => to_json(&store.applicants(job_id).await?),
        TeacherCommands::SetStatus {
            application_id,
            status,
            reason,
        } => {
            let change = StatusChange::new(status.parse::<ApplicationStatus>()?, reason);
            to_json(&store.set_application_status(application_id, &change).await?)
        }
    }
}

/// Load a resume from disk. A non-PDF name is rejected before the file is read,
/// and the content is checked before any request.
pub fn read_resume(path: &Path) -> CliResult<ResumeUpload> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    ResumeUpload::check_file_name(&file_name)?;

    let bytes = std::fs::read(path).map_err(|e| CliError::io(path.to_path_buf(), e))?;

    Ok(ResumeUpload::new(file_name, bytes)?)
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    serde_json::to_value(value)
        .map_err(ClientError::from)
        .map_err(CliError::from)
}
