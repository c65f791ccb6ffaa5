use crate::client::{ApiClient, ApiRequest};
use crate::guard::{AuthGuard, GuardDecision, Route};
use crate::session::Session;
use crate::token_store::TokenStore;
use crate::{ClientError, ClientResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use jp_core::{Credentials, TokenResponse, User};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use tokio::sync::watch;

pub const DEFAULT_IDENTITY_PATH: &str = "/student/profile";

const LOGIN_PATH: &str = "/auth/login";

/// Owner of the session state and the only code that writes it.
///
/// Readers take [`Session`] snapshots or subscribe to changes. Every backend
/// call that may carry the token goes through [`dispatch`](Self::dispatch),
/// which decides when a 401 ends the session.
pub struct SessionStore {
    client: ApiClient,
    tokens: Arc<dyn TokenStore>,
    identity_path: String,
    state: watch::Sender<Session>,
    initialized: AtomicBool,
}

impl SessionStore {
    pub fn new(client: ApiClient, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            client,
            tokens,
            identity_path: String::from(DEFAULT_IDENTITY_PATH),
            state: watch::Sender::new(Session::starting()),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn with_identity_path(mut self, path: impl Into<String>) -> Self {
        self.identity_path = path.into();
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Decision for `route` against the current snapshot
    pub fn guard(&self, route: Route) -> GuardDecision {
        AuthGuard::evaluate(route, &self.state.borrow())
    }

    /// Wait until startup verification has finished.
    pub async fn wait_resolved(&self) -> Session {
        let mut receiver = self.state.subscribe();
        match receiver.wait_for(|session| !session.loading()).await {
            Ok(session) => session.clone(),
            Err(_) => self.snapshot(),
        }
    }

    /// Read the persisted token and verify it by fetching the identity.
    ///
    /// Runs once; later calls return the current snapshot. Any failure clears
    /// the token and leaves the session anonymous. Never leaves `loading` set.
    pub async fn initialize(&self) -> Session {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return self.snapshot();
        }

        let stored = self.tokens.load().unwrap_or_else(|e| {
            warn!("Failed to read persisted token: {e}");
            None
        });

        let Some(token) = stored else {
            debug!("No persisted token");
            self.state.send_replace(Session::anonymous());
            return self.snapshot();
        };

        self.state.send_replace(Session::verifying(token.clone()));

        match self.fetch_identity(&token).await {
            Ok(user) => {
                info!("Restored session for {}", user.email);
                self.publish_if_current(&token, Session::authenticated(token.clone(), user));
            }
            Err(e) => {
                warn!("Persisted token rejected: {e}");
                self.clear_persisted();
                self.publish_if_current(&token, Session::anonymous());
            }
        }

        self.snapshot()
    }

    /// Exchange credentials for a token, persist it, then load the identity.
    ///
    /// The session becomes authenticated only after both steps succeed. If the
    /// identity fetch fails the token is cleared again and the error is
    /// [`ClientError::ProfileLoad`].
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<User> {
        credentials.validate()?;

        let request = ApiRequest::post(LOGIN_PATH)
            .anonymous()
            .form(credentials.form_fields())
            .failure_message("Login failed");

        let response: TokenResponse = self.client.execute_as(&request, None).await?;
        self.tokens.save(&response.access_token)?;

        match self.fetch_identity(&response.access_token).await {
            Ok(user) => {
                info!("Logged in as {}", user.email);
                self.state.send_replace(Session::authenticated(
                    response.access_token,
                    user.clone(),
                ));
                Ok(user)
            }
            Err(e) => {
                warn!("Login succeeded but profile load failed: {e}");
                self.clear_persisted();
                self.state.send_replace(Session::anonymous());
                Err(ClientError::profile_load(e))
            }
        }
    }

    /// Forget the token and identity. No network call; repeat calls are no-ops.
    pub fn logout(&self) -> ClientResult<()> {
        let cleared = self.tokens.clear();

        let changed = self.state.send_if_modified(|session| {
            if *session == Session::anonymous() {
                false
            } else {
                *session = Session::anonymous();
                true
            }
        });

        if changed {
            info!("Logged out");
        }

        cleared
    }

    /// End the session after a 401, but only if it still holds `token_used`.
    ///
    /// Returns whether this call cleared it; concurrent 401s for the same token
    /// clear it exactly once.
    pub fn invalidate(&self, token_used: &str) -> bool {
        let invalidated = self.state.send_if_modified(|session| {
            if session.token() == Some(token_used) {
                *session = Session::anonymous();
                true
            } else {
                false
            }
        });

        if invalidated {
            info!("Session invalidated by the backend");
            self.clear_persisted();
        }

        invalidated
    }

    /// Send a request with the current token and decode the response.
    ///
    /// An `Unauthorized` answer to a request that carried the token ends the
    /// session before the error is returned.
    pub async fn dispatch<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let token = if request.carries_token() {
            self.state.borrow().token().map(String::from)
        } else {
            None
        };

        let result = self.client.execute_as(&request, token.as_deref()).await;

        if let Err(ref e) = result
            && e.is_unauthorized()
            && let Some(ref used) = token
        {
            self.invalidate(used);
        }

        result
    }

    /// Re-fetch the identity and republish it (e.g. after a profile update).
    pub async fn refresh_identity(&self) -> ClientResult<User> {
        let request = self.identity_request();
        let token = self.state.borrow().token().map(String::from);
        let user: User = self.dispatch(request).await?;

        if let Some(token) = token {
            let update = user.clone();
            self.state.send_if_modified(|session| {
                if session.token() == Some(token.as_str()) && session.identity() != Some(&update) {
                    session.set_identity(update);
                    true
                } else {
                    false
                }
            });
        }

        Ok(user)
    }

    fn identity_request(&self) -> ApiRequest {
        ApiRequest::get(self.identity_path.clone()).failure_message("Failed to load profile")
    }

    async fn fetch_identity(&self, token: &str) -> ClientResult<User> {
        self.client
            .execute_as(&self.identity_request(), Some(token))
            .await
    }

    fn publish_if_current(&self, token: &str, next: Session) {
        self.state.send_if_modified(|session| {
            if session.token() == Some(token) {
                *session = next;
                true
            } else {
                false
            }
        });
    }

    fn clear_persisted(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!("Failed to clear persisted token: {e}");
        }
    }
}
