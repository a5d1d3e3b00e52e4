/// Repository trait for recruit posting persistence
///
/// Implementation uses Diesel ORM with PostgreSQL. Soft delete is a flag
/// flip; `purge_soft_deleted` is the physical removal the cleanup job runs
/// and must stay a pure predicate over current row state so that re-running
/// it is safe.
use crate::modules::recruit::domain::entities::Recruit;
use crate::modules::recruit::domain::value_objects::RecruitStatus;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecruitRepository: Send + Sync {
    async fn insert(&self, recruit: &Recruit) -> AppResult<Recruit>;

    /// Fetch by id regardless of the soft-delete flag; callers decide how
    /// a deleted row surfaces.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recruit>>;

    /// All postings that are not soft-deleted, newest first.
    async fn list_active(&self) -> AppResult<Vec<Recruit>>;

    async fn update(&self, recruit: &Recruit) -> AppResult<Recruit>;

    async fn set_status(&self, id: Uuid, status: RecruitStatus) -> AppResult<()>;

    async fn soft_delete(&self, id: Uuid, deleted_at: DateTime<Utc>) -> AppResult<()>;

    async fn is_bookmarked(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<bool>;

    /// Which of the given postings the user has bookmarked.
    async fn bookmarked_ids(&self, user_id: Uuid, recruit_ids: Vec<Uuid>) -> AppResult<Vec<Uuid>>;

    async fn insert_bookmark(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<()>;

    async fn delete_bookmark(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<usize>;

    /// Physically delete every soft-deleted posting, returning how many
    /// rows went away. Bookmarks follow via FK cascade.
    async fn purge_soft_deleted(&self) -> AppResult<usize>;
}
