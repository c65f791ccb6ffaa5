mod session_snapshot;
mod session_store;

pub use session_snapshot::Session;
pub use session_store::{DEFAULT_IDENTITY_PATH, SessionStore};
