/// Diesel-based implementation of RecruitRepository
use crate::modules::recruit::domain::entities::Recruit;
use crate::modules::recruit::domain::repository::RecruitRepository;
use crate::modules::recruit::domain::value_objects::RecruitStatus;
use crate::modules::recruit::infrastructure::models::{
    NewBookmarkRow, NewRecruitRow, RecruitChangesRow, RecruitModel,
};
use crate::schema::{recruit_bookmarks, recruits};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

pub struct RecruitRepositoryImpl {
    pool: DbPool,
}

impl RecruitRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool
            .get()
            .map_err(|e| AppError::DatabaseError(format!("Failed to get connection: {}", e)))
    }
}

#[async_trait]
impl RecruitRepository for RecruitRepositoryImpl {
    async fn insert(&self, recruit: &Recruit) -> AppResult<Recruit> {
        let mut conn = self.get_conn()?;

        let inserted: RecruitModel = diesel::insert_into(recruits::table)
            .values(NewRecruitRow::from_recruit(recruit))
            .get_result(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert recruit: {}", e)))?;

        Ok(inserted.to_recruit())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recruit>> {
        let mut conn = self.get_conn()?;

        let row: Option<RecruitModel> = recruits::table
            .find(id)
            .first(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to find recruit: {}", e)))?;

        Ok(row.map(|r| r.to_recruit()))
    }

    async fn list_active(&self) -> AppResult<Vec<Recruit>> {
        let mut conn = self.get_conn()?;

        let rows: Vec<RecruitModel> = recruits::table
            .filter(recruits::is_deleted.eq(false))
            .order(recruits::created_at.desc())
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to list recruits: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.to_recruit()).collect())
    }

    async fn update(&self, recruit: &Recruit) -> AppResult<Recruit> {
        let mut conn = self.get_conn()?;

        let updated: RecruitModel = diesel::update(recruits::table.find(recruit.id))
            .set(RecruitChangesRow::from_recruit(recruit))
            .get_result(&mut conn)?;

        Ok(updated.to_recruit())
    }

    async fn set_status(&self, id: Uuid, status: RecruitStatus) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::update(recruits::table.find(id))
            .set((
                recruits::status.eq(status),
                recruits::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to set status: {}", e)))?;

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid, deleted_at: DateTime<Utc>) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::update(recruits::table.find(id))
            .set((
                recruits::is_deleted.eq(true),
                recruits::deleted_at.eq(Some(deleted_at)),
                recruits::updated_at.eq(deleted_at),
            ))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to soft-delete: {}", e)))?;

        Ok(())
    }

    async fn is_bookmarked(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<bool> {
        let mut conn = self.get_conn()?;

        let found = diesel::select(diesel::dsl::exists(
            recruit_bookmarks::table.find((user_id, recruit_id)),
        ))
        .get_result::<bool>(&mut conn)
        .map_err(|e| AppError::DatabaseError(format!("Failed to check bookmark: {}", e)))?;

        Ok(found)
    }

    async fn bookmarked_ids(&self, user_id: Uuid, recruit_ids: Vec<Uuid>) -> AppResult<Vec<Uuid>> {
        let mut conn = self.get_conn()?;

        let ids: Vec<Uuid> = recruit_bookmarks::table
            .filter(recruit_bookmarks::user_id.eq(user_id))
            .filter(recruit_bookmarks::recruit_id.eq_any(recruit_ids))
            .select(recruit_bookmarks::recruit_id)
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to load bookmarks: {}", e)))?;

        Ok(ids)
    }

    async fn insert_bookmark(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::insert_into(recruit_bookmarks::table)
            .values(NewBookmarkRow {
                user_id,
                recruit_id,
            })
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete_bookmark(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<usize> {
        let mut conn = self.get_conn()?;

        let affected = diesel::delete(recruit_bookmarks::table.find((user_id, recruit_id)))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete bookmark: {}", e)))?;

        Ok(affected)
    }

    async fn purge_soft_deleted(&self) -> AppResult<usize> {
        let mut conn = self.get_conn()?;

        // Predicate over current row state only; re-running is harmless
        let purged = diesel::delete(recruits::table.filter(recruits::is_deleted.eq(true)))
            .execute(&mut conn)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to purge soft-deleted rows: {}", e))
            })?;

        Ok(purged)
    }
}
