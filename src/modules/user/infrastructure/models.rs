/// Diesel models for the users table
use crate::modules::user::domain::entities::{ProfileChanges, User};
use crate::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Diesel model for inserting new users
#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
}

impl NewUserRow {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        }
    }
}

/// Diesel model for querying existing users
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Convert to domain User
    pub fn to_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            name: self.name,
            bio: self.bio,
            profile_image_url: self.profile_image_url,
            portfolio_url: self.portfolio_url,
            phone: self.phone,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Changeset for profile edits. None clears the column, matching the
/// edit-form semantics where every field is submitted.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct ProfileChangesRow {
    pub name: String,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileChangesRow {
    pub fn from_changes(changes: &ProfileChanges) -> Self {
        Self {
            name: changes.name.clone(),
            bio: changes.bio.clone(),
            profile_image_url: changes.profile_image_url.clone(),
            portfolio_url: changes.portfolio_url.clone(),
            phone: changes.phone.clone(),
            email: changes.email.clone(),
            updated_at: Utc::now(),
        }
    }
}
