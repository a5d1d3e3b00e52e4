use crate::modules::follow::domain::repository::FollowRepository;
use crate::modules::user::domain::entities::{
    NewUser, ProfileChanges, User, UserProfile, UserSummary,
};
use crate::modules::user::domain::repository::UserRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use std::sync::Arc;
use strsim::jaro_winkler;
use uuid::Uuid;

const SEARCH_CANDIDATE_LIMIT: i64 = 50;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    async fn resolve_user(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }

    /// Attach follow aggregates to a user. `is_following` is computed for
    /// the concrete viewer every time; a self view yields false because a
    /// self-edge cannot exist, not because of a special case.
    async fn profile_of(&self, user: User, viewer_id: Option<Uuid>) -> AppResult<UserProfile> {
        let (follower_count, following_count) = futures::future::try_join(
            self.follow_repo.count_by_following(user.id),
            self.follow_repo.count_by_follower(user.id),
        )
        .await?;

        let is_following = match viewer_id {
            Some(viewer) => self.follow_repo.exists_edge(viewer, user.id).await?,
            None => false,
        };

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            name: user.name,
            bio: user.bio,
            profile_image_url: user.profile_image_url,
            portfolio_url: user.portfolio_url,
            phone: user.phone,
            email: user.email,
            follower_count,
            following_count,
            is_following,
        })
    }

    pub async fn create_user(&self, new_user: NewUser) -> AppResult<UserSummary> {
        Validator::validate_username(&new_user.username)?;
        Validator::validate_password(&new_user.password)?;

        if self
            .user_repo
            .find_by_username(&new_user.username)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already taken",
                new_user.username
            )));
        }

        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            name: new_user.name,
            bio: None,
            profile_image_url: None,
            portfolio_url: None,
            phone: None,
            email: new_user.email,
            password_hash: User::hash_password(&new_user.password)?,
            created_at: now,
            updated_at: now,
        };

        let saved = self.user_repo.insert(&user).await?;
        log_info!("Created user '{}'", saved.username);

        Ok(saved.summary())
    }

    pub async fn get_profile(
        &self,
        target_username: &str,
        viewer_id: Option<Uuid>,
    ) -> AppResult<UserProfile> {
        let user = self.resolve_user(target_username).await?;
        self.profile_of(user, viewer_id).await
    }

    pub async fn update_profile(
        &self,
        username: &str,
        caller_id: Uuid,
        changes: ProfileChanges,
    ) -> AppResult<UserProfile> {
        let user = self.resolve_user(username).await?;

        if user.id != caller_id {
            return Err(AppError::Unauthorized(
                "Only the profile owner can edit it".to_string(),
            ));
        }

        if changes.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Display name cannot be empty".to_string(),
            ));
        }

        let updated = self.user_repo.update_profile(user.id, &changes).await?;
        log_debug!("Updated profile of '{}'", username);

        self.profile_of(updated, Some(caller_id)).await
    }

    pub async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self.resolve_user(username).await?;

        if !user.verify_password(current_password) {
            return Err(AppError::Unauthorized(
                "Current password does not match".to_string(),
            ));
        }

        Validator::validate_password(new_password)?;

        let new_hash = User::hash_password(new_password)?;
        self.user_repo.update_password(user.id, &new_hash).await?;

        log_info!("Password changed for '{}'", username);
        Ok(())
    }

    /// Substring candidates from the store, re-ranked by string similarity
    /// so exact and near matches come first.
    pub async fn search_users(
        &self,
        query: &str,
        exclude_user_id: Option<Uuid>,
    ) -> AppResult<Vec<UserSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self
            .user_repo
            .search(query, SEARCH_CANDIDATE_LIMIT)
            .await?;

        let query_lower = query.to_lowercase();
        let mut ranked: Vec<(f64, UserSummary)> = candidates
            .into_iter()
            .filter(|u| Some(u.id) != exclude_user_id)
            .map(|u| {
                let score = jaro_winkler(&u.username.to_lowercase(), &query_lower)
                    .max(jaro_winkler(&u.name.to_lowercase(), &query_lower));
                (score, u.summary())
            })
            .collect();

        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked.into_iter().map(|(_, u)| u).collect())
    }
}
