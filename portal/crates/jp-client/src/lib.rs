pub mod client;
pub mod error;
pub mod guard;
pub mod resources;
pub mod retry;
pub mod session;
pub mod token_store;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ApiRequest, AuthPolicy, RequestBody};
pub use error::{
    ClientError, NETWORK_ERROR_MESSAGE, PROFILE_LOAD_MESSAGE, Result as ClientResult,
};
pub use guard::{Access, AuthGuard, GuardDecision, Route, View};
pub use session::{DEFAULT_IDENTITY_PATH, Session, SessionStore};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
