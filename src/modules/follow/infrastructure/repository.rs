/// Diesel-based implementation of FollowRepository
///
/// The follows table has a composite primary key over the ordered pair, so
/// duplicate-edge races across processes are settled by the database; the
/// unique violation arrives here as `AppError::Conflict` via the shared
/// error mapping.
use crate::modules::follow::domain::entities::FollowEdge;
use crate::modules::follow::domain::repository::FollowRepository;
use crate::modules::follow::infrastructure::models::{FollowRow, NewFollowRow};
use crate::modules::user::domain::entities::UserSummary;
use crate::modules::user::infrastructure::models::UserModel;
use crate::schema::{follows, users};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};
use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

pub struct FollowRepositoryImpl {
    pool: DbPool,
}

impl FollowRepositoryImpl {
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
impl FollowRepository for FollowRepositoryImpl {
    async fn insert_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<FollowEdge> {
        let mut conn = self.get_conn()?;

        let row: FollowRow = diesel::insert_into(follows::table)
            .values(NewFollowRow {
                follower_id,
                following_id,
            })
            .get_result(&mut conn)?;

        Ok(row.to_edge())
    }

    async fn delete_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<usize> {
        let mut conn = self.get_conn()?;

        let affected = diesel::delete(follows::table.find((follower_id, following_id)))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete edge: {}", e)))?;

        Ok(affected)
    }

    async fn exists_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<bool> {
        let mut conn = self.get_conn()?;

        let found = diesel::select(diesel::dsl::exists(
            follows::table.find((follower_id, following_id)),
        ))
        .get_result::<bool>(&mut conn)
        .map_err(|e| AppError::DatabaseError(format!("Failed to check edge: {}", e)))?;

        Ok(found)
    }

    async fn count_by_following(&self, user_id: Uuid) -> AppResult<i64> {
        let mut conn = self.get_conn()?;

        let count = follows::table
            .filter(follows::following_id.eq(user_id))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to count followers: {}", e)))?;

        Ok(count)
    }

    async fn count_by_follower(&self, user_id: Uuid) -> AppResult<i64> {
        let mut conn = self.get_conn()?;

        let count = follows::table
            .filter(follows::follower_id.eq(user_id))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to count followings: {}", e)))?;

        Ok(count)
    }

    async fn list_followers(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>> {
        let mut conn = self.get_conn()?;

        let rows: Vec<UserModel> = follows::table
            .inner_join(users::table.on(users::id.eq(follows::follower_id)))
            .filter(follows::following_id.eq(user_id))
            .select(UserModel::as_select())
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to list followers: {}", e)))?;

        Ok(rows.into_iter().map(|u| u.to_user().summary()).collect())
    }

    async fn list_followings(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>> {
        let mut conn = self.get_conn()?;

        let rows: Vec<UserModel> = follows::table
            .inner_join(users::table.on(users::id.eq(follows::following_id)))
            .filter(follows::follower_id.eq(user_id))
            .select(UserModel::as_select())
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to list followings: {}", e)))?;

        Ok(rows.into_iter().map(|u| u.to_user().summary()).collect())
    }
}
