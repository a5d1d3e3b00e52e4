/// Repository trait for user persistence
///
/// Resolves usernames to identities and stores profile data.
/// Implementation uses Diesel ORM with PostgreSQL.
use crate::modules::user::domain::entities::{ProfileChanges, User};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. The username must be unique; a duplicate
    /// surfaces as `AppError::Conflict`.
    async fn insert(&self, user: &User) -> AppResult<User>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn update_profile(&self, id: Uuid, changes: &ProfileChanges) -> AppResult<User>;

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()>;

    /// Case-insensitive substring match on username and display name.
    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<User>>;
}
