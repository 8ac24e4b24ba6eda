//! Account record held by the mock session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Profile visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Friends,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: bool,
    pub newsletter: bool,
    pub privacy: Privacy,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            newsletter: true,
            privacy: Privacy::Public,
        }
    }
}

/// A signed-in account
///
/// This is the record persisted to durable storage, so its serialized form is
/// the storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub join_date: DateTime<Utc>,
    pub preferences: Preferences,
}

/// Partial update applied by a profile edit
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub preferences: Option<Preferences>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.avatar.is_none()
            && self.preferences.is_none()
    }

    /// Merge this update over `user`, returning the updated record
    pub fn apply_to(&self, user: &User) -> User {
        let mut updated = user.clone();
        if let Some(name) = &self.name {
            updated.name = name.clone();
        }
        if let Some(email) = &self.email {
            updated.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            updated.phone = Some(phone.clone());
        }
        if let Some(avatar) = &self.avatar {
            updated.avatar = Some(avatar.clone());
        }
        if let Some(preferences) = self.preferences {
            updated.preferences = preferences;
        }
        updated
    }
}
