//! User account models. Accounts are keyed by the identity provider's
//! subject identifier.

use fitness_core::types::{DbId, Timestamp};
use fitness_core::validation::{trimmed, trimmed_opt};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::common::Timestamps;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: DbId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub auth0_sub: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl User {
    /// Apply a profile update. `None` fields are left unchanged.
    pub fn apply(&mut self, update: UpdateUser) {
        if update.first_name.is_some() {
            self.first_name = update.first_name;
        }
        if update.last_name.is_some() {
            self.last_name = update.last_name;
        }
        self.timestamps.touch();
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a user from the identity provider callback.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(deserialize_with = "trimmed")]
    #[validate(email, length(max = 255))]
    pub email: String,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 255))]
    pub auth0_sub: String,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for updating a user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// User as returned to clients. The subject identifier is not exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: DbId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.timestamps.created_at,
        }
    }
}
