mod guard;
mod retry;

use jp_core::{Role, User};

pub(crate) fn user(first_name: &str, role: Role) -> User {
    User {
        first_name: first_name.to_string(),
        email: format!("{}@x.com", first_name.to_lowercase()),
        role,
        ..User::default()
    }
}
