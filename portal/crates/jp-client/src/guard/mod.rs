mod auth_guard;
mod route;

pub use auth_guard::{AuthGuard, GuardDecision, View};
pub use route::{Access, Route};
