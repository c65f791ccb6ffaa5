use crate::ClientResult;
use crate::token_store::TokenStore;

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-local token store; counts how often it was cleared.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    clears: AtomicUsize,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
            clears: AtomicUsize::new(0),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.slot().clone()
    }

    /// Number of `clear` calls so far
    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.current())
    }

    fn save(&self, token: &str) -> ClientResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.slot() = None;
        Ok(())
    }
}
