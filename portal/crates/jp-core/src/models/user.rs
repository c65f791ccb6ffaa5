use crate::Role;

use serde::{Deserialize, Serialize};

/// Authenticated identity as returned by the profile endpoint.
///
/// Owned by the backend; the client only caches it. Missing fields fall back to
/// defaults so a partial profile still yields a usable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct User {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }
}
