mod file_token_store;
mod memory_token_store;

pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;

use crate::ClientResult;

/// Persistence for the single opaque bearer token.
///
/// Only the session store writes through this; nothing else is persisted.
pub trait TokenStore: Send + Sync {
    /// `Ok(None)` when no token has been saved
    fn load(&self) -> ClientResult<Option<String>>;

    fn save(&self, token: &str) -> ClientResult<()>;

    /// Remove the token. Clearing an absent token succeeds.
    fn clear(&self) -> ClientResult<()>;
}
