mod config;

use std::env;
use std::ffi::OsString;

use tempfile::TempDir;

/// Overrides one `JP_*` variable for the life of the guard, then puts back what was there.
///
/// Tests that use it must run `#[serial]`: the process environment is shared.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    fn capture(key: &'static str) -> Self {
        Self {
            key,
            previous: env::var_os(key),
        }
    }

    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let guard = Self::capture(key);
        // SAFETY: callers are #[serial], no other thread touches the environment.
        unsafe { env::set_var(key, value) };
        guard
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let guard = Self::capture(key);
        // SAFETY: as above
        unsafe { env::remove_var(key) };
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: as above
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Fresh config directory exposed through `JP_CONFIG_DIR`.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("JP_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}
