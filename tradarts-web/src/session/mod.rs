//! Mock session lifecycle
//!
//! [`SessionService`] owns the signed-in state. It is built with an
//! [`Authenticator`] and a [`SessionStore`], restored once at startup, then
//! shared through the router state.
//!
//! ```text
//! Loading ──restore──▶ LoggedOut ──login/register──▶ Loading ──▶ LoggedIn
//!                          ▲                                        │
//!                          └────────────────logout──────────────────┘
//! ```
//!
//! A failed login, registration or profile update returns the session to the
//! state it had before the call.

mod auth;
mod store;
pub mod validate;

pub use auth::{Authenticator, Credentials, MockAuthenticator, Registration};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

use serde::Serialize;
use std::fmt;
use std::io::ErrorKind;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};
use tradarts_common::events::{EventBus, TradartsEvent};
use tradarts_common::models::{ProfileUpdate, User};
use tradarts_common::time;

use validate::{is_valid_email, is_valid_phone};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("All fields are required")]
    MissingFields,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("No user logged in")]
    NotLoggedIn,

    #[error("Session storage error: {0}")]
    Storage(#[from] tradarts_common::Error),
}

/// Current session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "user", rename_all = "camelCase")]
pub enum SessionState {
    /// Restoring, or an authentication call is in flight
    Loading,
    LoggedOut,
    LoggedIn(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

pub struct SessionService {
    state: RwLock<SessionState>,
    /// Serializes state-changing operations
    op_lock: Mutex<()>,
    authenticator: Arc<dyn Authenticator>,
    store: Arc<dyn SessionStore>,
    update_delay: Duration,
    events: EventBus,
}

impl SessionService {
    /// New service in the `Loading` state; call [`restore`](Self::restore) next
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        store: Arc<dyn SessionStore>,
        events: EventBus,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState::Loading),
            op_lock: Mutex::new(()),
            authenticator,
            store,
            update_delay: Duration::ZERO,
            events,
        }
    }

    /// Simulated latency for profile updates
    pub fn with_update_delay(mut self, delay: Duration) -> Self {
        self.update_delay = delay;
        self
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    /// Load the stored record, if any
    ///
    /// A record that is not UTF-8 or does not parse is removed and the
    /// session starts logged out.
    pub async fn restore(&self) -> Result<(), SessionError> {
        let _guard = self.op_lock.lock().await;

        let restored = match self.store.load().await {
            Ok(None) => SessionState::LoggedOut,
            Ok(Some(record)) => match serde_json::from_str::<User>(&record) {
                Ok(user) => {
                    info!("Restored session for user {}", user.id);
                    SessionState::LoggedIn(user)
                }
                Err(e) => self.discard_record(&e).await?,
            },
            Err(tradarts_common::Error::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                self.discard_record(&e).await?
            }
            Err(e) => {
                *self.state.write().await = SessionState::LoggedOut;
                return Err(e.into());
            }
        };

        *self.state.write().await = restored;
        Ok(())
    }

    async fn discard_record(
        &self,
        reason: &(dyn fmt::Display + Sync),
    ) -> Result<SessionState, SessionError> {
        warn!("Discarding unreadable session record: {}", reason);
        *self.state.write().await = SessionState::LoggedOut;
        self.store.clear().await?;
        Ok(SessionState::LoggedOut)
    }

    pub async fn login(&self, credentials: Credentials) -> Result<User, SessionError> {
        let _guard = self.op_lock.lock().await;
        let previous = self.enter_loading().await;

        let result = self.authenticator.login(&credentials).await;
        self.finish(previous, result).await
    }

    pub async fn register(&self, registration: Registration) -> Result<User, SessionError> {
        let _guard = self.op_lock.lock().await;
        let previous = self.enter_loading().await;

        let result = self.authenticator.register(&registration).await;
        self.finish(previous, result).await
    }

    /// Merge a partial update into the signed-in user
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User, SessionError> {
        let _guard = self.op_lock.lock().await;

        let Some(user) = self.current_user().await else {
            return Err(SessionError::NotLoggedIn);
        };

        let previous = self.enter_loading().await;
        tokio::time::sleep(self.update_delay).await;

        let result = validate_update(&update).map(|()| update.apply_to(&user));
        self.finish(previous, result).await
    }

    /// Forget the user in memory and in storage
    pub async fn logout(&self) -> Result<(), SessionError> {
        let _guard = self.op_lock.lock().await;

        *self.state.write().await = SessionState::LoggedOut;
        self.store.clear().await?;

        info!("User logged out");
        self.events.emit_lossy(TradartsEvent::SessionChanged {
            logged_in: false,
            user_id: None,
            timestamp: time::now(),
        });
        Ok(())
    }

    async fn enter_loading(&self) -> SessionState {
        let mut state = self.state.write().await;
        std::mem::replace(&mut *state, SessionState::Loading)
    }

    /// Persist and publish a successful result, or roll back to `previous`
    async fn finish(
        &self,
        previous: SessionState,
        result: Result<User, SessionError>,
    ) -> Result<User, SessionError> {
        let user = match result {
            Ok(user) => user,
            Err(e) => {
                warn!("Session operation rejected: {}", e);
                *self.state.write().await = previous;
                return Err(e);
            }
        };

        if let Err(e) = self.persist(&user).await {
            *self.state.write().await = previous;
            return Err(e);
        }

        *self.state.write().await = SessionState::LoggedIn(user.clone());
        info!("Session active for user {}", user.id);
        self.events.emit_lossy(TradartsEvent::SessionChanged {
            logged_in: true,
            user_id: Some(user.id.clone()),
            timestamp: time::now(),
        });
        Ok(user)
    }

    async fn persist(&self, user: &User) -> Result<(), SessionError> {
        let record = serde_json::to_string(user).map_err(tradarts_common::Error::from)?;
        self.store.save(&record).await?;
        Ok(())
    }
}

fn validate_update(update: &ProfileUpdate) -> Result<(), SessionError> {
    if let Some(name) = &update.name {
        if validate::is_blank(name) {
            return Err(SessionError::MissingFields);
        }
    }
    if let Some(email) = &update.email {
        if !is_valid_email(email) {
            return Err(SessionError::InvalidEmail);
        }
    }
    if let Some(phone) = &update.phone {
        if !is_valid_phone(phone) {
            return Err(SessionError::InvalidPhone);
        }
    }
    Ok(())
}
