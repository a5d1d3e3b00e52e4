/// Store trait for the follow graph
///
/// Uniqueness of an edge is the storage layer's job (primary key over the
/// ordered pair), not in-process locking: multiple service instances may
/// race on the same pair and exactly one insert wins.
/// Implementation uses Diesel ORM with PostgreSQL.
use crate::modules::follow::domain::entities::FollowEdge;
use crate::modules::user::domain::entities::UserSummary;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert one edge, returning it as stored. A duplicate pair surfaces
    /// as `AppError::Conflict` (mapped from the unique violation).
    async fn insert_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<FollowEdge>;

    /// Delete one edge, returning the number of rows affected (0 or 1).
    async fn delete_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<usize>;

    async fn exists_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<bool>;

    /// Number of edges pointing at this user (their followers).
    async fn count_by_following(&self, user_id: Uuid) -> AppResult<i64>;

    /// Number of edges leaving this user (who they follow).
    async fn count_by_follower(&self, user_id: Uuid) -> AppResult<i64>;

    /// Everyone with an edge pointing at this user.
    async fn list_followers(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>>;

    /// Everyone this user points at.
    async fn list_followings(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>>;
}
