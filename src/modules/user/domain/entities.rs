use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// The hashed password of the user. (argon2)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Uses argon2 to verify the stored hash against the provided password.
    pub fn verify_password(&self, password: &str) -> bool {
        let hash = match PasswordHash::new(&self.password_hash) {
            Ok(hash) => hash,
            Err(err) => {
                crate::log_error!("Failed to parse stored password hash: {}", err);
                return false;
            }
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok()
    }

    /// Generates a new password hash using argon2.
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            name: self.name.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

/// Public view of a user, safe to hand to other users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub profile_image_url: Option<String>,
}

/// Full profile view with follow graph aggregates attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub follower_count: i64,
    pub following_count: i64,
    /// Whether the viewing identity follows this user. Always computed from
    /// the edge set for the concrete viewer, false when there is no viewer.
    pub is_following: bool,
}

/// A user to be created (before insertion to database)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password: String,
    pub email: Option<String>,
}

/// Profile fields a user may edit. `None` clears the field.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
