/// Diesel-based implementation of UserRepository
use crate::modules::user::domain::entities::{ProfileChanges, User};
use crate::modules::user::domain::repository::UserRepository;
use crate::modules::user::infrastructure::models::{NewUserRow, ProfileChangesRow, UserModel};
use crate::schema::users;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{DbConnection, DbPool};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

pub struct UserRepositoryImpl {
    pool: DbPool,
}

impl UserRepositoryImpl {
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
impl UserRepository for UserRepositoryImpl {
    async fn insert(&self, user: &User) -> AppResult<User> {
        let mut conn = self.get_conn()?;

        let inserted: UserModel = diesel::insert_into(users::table)
            .values(NewUserRow::from_user(user))
            .get_result(&mut conn)?;

        Ok(inserted.to_user())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let mut conn = self.get_conn()?;

        let row: Option<UserModel> = users::table
            .find(id)
            .first(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to find user by id: {}", e)))?;

        Ok(row.map(|u| u.to_user()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let mut conn = self.get_conn()?;

        let row: Option<UserModel> = users::table
            .filter(users::username.eq(username))
            .first(&mut conn)
            .optional()
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to find user by username: {}", e))
            })?;

        Ok(row.map(|u| u.to_user()))
    }

    async fn update_profile(&self, id: Uuid, changes: &ProfileChanges) -> AppResult<User> {
        let mut conn = self.get_conn()?;

        let updated: UserModel = diesel::update(users::table.find(id))
            .set(ProfileChangesRow::from_changes(changes))
            .get_result(&mut conn)?;

        Ok(updated.to_user())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::update(users::table.find(id))
            .set((
                users::password_hash.eq(password_hash),
                users::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to update password: {}", e)))?;

        Ok(())
    }

    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<User>> {
        let mut conn = self.get_conn()?;
        let pattern = format!("%{}%", query);

        let rows: Vec<UserModel> = users::table
            .filter(
                users::username
                    .ilike(pattern.clone())
                    .or(users::name.ilike(pattern)),
            )
            .limit(limit)
            .load(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to search users: {}", e)))?;

        Ok(rows.into_iter().map(|u| u.to_user()).collect())
    }
}
