//! Authentication providers

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use tradarts_common::config::SessionTimings;
use tradarts_common::models::{Preferences, Role, User};
use tradarts_common::time;

use super::validate::{is_blank, is_valid_email, is_valid_password, is_valid_phone};
use super::SessionError;

/// Login form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

/// Turns credentials into a user record
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<User, SessionError>;

    async fn register(&self, registration: &Registration) -> Result<User, SessionError>;
}

/// Accepts any well-formed input after a fixed delay
///
/// No credential is ever verified. Login always yields a user named
/// "John Doe"; registration yields a user with the submitted details.
#[derive(Debug, Clone, Default)]
pub struct MockAuthenticator {
    timings: SessionTimings,
}

impl MockAuthenticator {
    pub fn new(timings: SessionTimings) -> Self {
        Self { timings }
    }

    fn mock_user(name: &str, email: &str, phone: Option<&str>) -> User {
        User {
            id: time::epoch_millis().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
            avatar: None,
            role: Role::User,
            join_date: time::now(),
            preferences: Preferences::default(),
        }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<User, SessionError> {
        tokio::time::sleep(Duration::from_millis(self.timings.login_delay_ms)).await;

        if is_blank(&credentials.email) || is_blank(&credentials.password) {
            return Err(SessionError::MissingCredentials);
        }

        debug!("Mock login accepted for {}", credentials.email);
        Ok(Self::mock_user("John Doe", &credentials.email, None))
    }

    async fn register(&self, registration: &Registration) -> Result<User, SessionError> {
        tokio::time::sleep(Duration::from_millis(self.timings.register_delay_ms)).await;

        let Registration {
            name,
            email,
            phone,
            password,
        } = registration;

        if [name, email, phone, password].iter().any(|f| is_blank(f)) {
            return Err(SessionError::MissingFields);
        }
        if !is_valid_password(password) {
            return Err(SessionError::PasswordTooShort);
        }
        if !is_valid_email(email) {
            return Err(SessionError::InvalidEmail);
        }
        if !is_valid_phone(phone) {
            return Err(SessionError::InvalidPhone);
        }

        debug!("Mock registration accepted for {}", email);
        Ok(Self::mock_user(name, email, Some(phone)))
    }
}
