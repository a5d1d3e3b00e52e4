use crate::modules::follow::domain::entities::FollowCounts;
use crate::modules::follow::domain::repository::FollowRepository;
use crate::modules::user::domain::entities::{User, UserSummary};
use crate::modules::user::domain::repository::UserRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};
use std::sync::Arc;
use uuid::Uuid;

pub struct FollowService {
    follow_repo: Arc<dyn FollowRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl FollowService {
    pub fn new(follow_repo: Arc<dyn FollowRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            follow_repo,
            user_repo,
        }
    }

    /// Recompute both aggregates for a user from the edge set.
    async fn follow_counts(&self, user_id: Uuid, is_following: bool) -> AppResult<FollowCounts> {
        let (follower_count, following_count) = futures::future::try_join(
            self.follow_repo.count_by_following(user_id),
            self.follow_repo.count_by_follower(user_id),
        )
        .await?;

        Ok(FollowCounts::of(is_following, follower_count, following_count))
    }

    async fn resolve_user(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }

    pub async fn follow(&self, follower_id: Uuid, target_username: &str) -> AppResult<FollowCounts> {
        let following = self.resolve_user(target_username).await?;

        let follower = self
            .user_repo
            .find_by_id(follower_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Follower account not found".to_string()))?;

        // Self-follow is checked against the resolved target, not the raw name
        if following.id == follower.id {
            return Err(AppError::InvalidInput(
                "You cannot follow yourself".to_string(),
            ));
        }

        if self
            .follow_repo
            .exists_edge(follower.id, following.id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Already following '{}'",
                target_username
            )));
        }

        // Concurrent duplicates are settled by the primary key on the edge
        // pair; the pre-check above only gives sequential callers a cleaner
        // error path. A loser of the race still gets Conflict from here.
        self.follow_repo
            .insert_edge(follower.id, following.id)
            .await?;

        log_info!("User {} followed '{}'", follower.id, target_username);

        // The insert has committed by the time we get here, so the counts
        // below observe our own write.
        self.follow_counts(following.id, true).await
    }

    pub async fn unfollow(
        &self,
        follower_id: Uuid,
        target_username: &str,
    ) -> AppResult<FollowCounts> {
        let following = self.resolve_user(target_username).await?;

        let affected = self
            .follow_repo
            .delete_edge(follower_id, following.id)
            .await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!(
                "Not following '{}'",
                target_username
            )));
        }

        log_info!("User {} unfollowed '{}'", follower_id, target_username);

        self.follow_counts(following.id, false).await
    }

    pub async fn get_followers(&self, username: &str) -> AppResult<Vec<UserSummary>> {
        let user = self.resolve_user(username).await?;

        log_debug!("Listing followers of '{}'", username);
        self.follow_repo.list_followers(user.id).await
    }

    pub async fn get_followings(&self, username: &str) -> AppResult<Vec<UserSummary>> {
        let user = self.resolve_user(username).await?;

        log_debug!("Listing followings of '{}'", username);
        self.follow_repo.list_followings(user.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::follow::domain::repository::MockFollowRepository;
    use crate::modules::user::domain::repository::MockUserRepository;
    use chrono::Utc;

    fn user(id: Uuid, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            name: username.to_string(),
            bio: None,
            profile_image_url: None,
            portfolio_url: None,
            phone: None,
            email: None,
            password_hash: "$argon2id$test".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(
        follow_repo: MockFollowRepository,
        user_repo: MockUserRepository,
    ) -> FollowService {
        FollowService::new(Arc::new(follow_repo), Arc::new(user_repo))
    }

    #[tokio::test]
    async fn follow_inserts_edge_and_returns_fresh_counts() {
        let follower_id = Uuid::new_v4();
        let target_id = Uuid::new_v4();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user(target_id, "target"))));
        user_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(user(id, "me"))));

        let mut follow_repo = MockFollowRepository::new();
        follow_repo.expect_exists_edge().returning(|_, _| Ok(false));
        follow_repo
            .expect_insert_edge()
            .withf(move |f, t| *f == follower_id && *t == target_id)
            .times(1)
            .returning(|f, t| {
                Ok(crate::modules::follow::domain::entities::FollowEdge {
                    follower_id: f,
                    following_id: t,
                    created_at: Utc::now(),
                })
            });
        // Counts queried after the write observe it
        follow_repo.expect_count_by_following().returning(|_| Ok(1));
        follow_repo.expect_count_by_follower().returning(|_| Ok(0));

        let counts = service(follow_repo, user_repo)
            .follow(follower_id, "target")
            .await
            .unwrap();

        assert!(counts.is_following);
        assert_eq!(counts.follower_count, 1);
        assert_eq!(counts.following_count, 0);
    }

    #[tokio::test]
    async fn follow_rejects_self_follow_without_touching_store() {
        let me = Uuid::new_v4();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user(me, "me"))));
        user_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(user(id, "me"))));

        let mut follow_repo = MockFollowRepository::new();
        follow_repo.expect_insert_edge().times(0);
        follow_repo.expect_exists_edge().times(0);

        let err = service(follow_repo, user_repo)
            .follow(me, "me")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn follow_twice_is_a_conflict() {
        let follower_id = Uuid::new_v4();
        let target_id = Uuid::new_v4();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user(target_id, "target"))));
        user_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(user(id, "me"))));

        let mut follow_repo = MockFollowRepository::new();
        follow_repo.expect_exists_edge().returning(|_, _| Ok(true));
        follow_repo.expect_insert_edge().times(0);

        let err = service(follow_repo, user_repo)
            .follow(follower_id, "target")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn follow_unknown_username_is_not_found() {
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_find_by_username().returning(|_| Ok(None));

        let follow_repo = MockFollowRepository::new();

        let err = service(follow_repo, user_repo)
            .follow(Uuid::new_v4(), "ghost")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unfollow_without_edge_is_not_found() {
        let target_id = Uuid::new_v4();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user(target_id, "target"))));

        let mut follow_repo = MockFollowRepository::new();
        follow_repo.expect_delete_edge().returning(|_, _| Ok(0));
        follow_repo.expect_count_by_following().times(0);

        let err = service(follow_repo, user_repo)
            .unfollow(Uuid::new_v4(), "target")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unfollow_removes_edge_and_recounts() {
        let follower_id = Uuid::new_v4();
        let target_id = Uuid::new_v4();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user(target_id, "target"))));

        let mut follow_repo = MockFollowRepository::new();
        follow_repo
            .expect_delete_edge()
            .withf(move |f, t| *f == follower_id && *t == target_id)
            .times(1)
            .returning(|_, _| Ok(1));
        follow_repo.expect_count_by_following().returning(|_| Ok(0));
        follow_repo.expect_count_by_follower().returning(|_| Ok(3));

        let counts = service(follow_repo, user_repo)
            .unfollow(follower_id, "target")
            .await
            .unwrap();

        assert!(!counts.is_following);
        assert_eq!(counts.follower_count, 0);
        assert_eq!(counts.following_count, 3);
    }

    #[tokio::test]
    async fn storage_failure_propagates_unchanged() {
        let target_id = Uuid::new_v4();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user(target_id, "target"))));
        user_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(user(id, "me"))));

        let mut follow_repo = MockFollowRepository::new();
        follow_repo.expect_exists_edge().returning(|_, _| Ok(false));
        follow_repo
            .expect_insert_edge()
            .returning(|_, _| Err(AppError::DatabaseError("connection reset".to_string())));

        let err = service(follow_repo, user_repo)
            .follow(Uuid::new_v4(), "target")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn lost_insert_race_surfaces_conflict_from_store() {
        // Pre-check saw no edge, but another caller inserted first; the
        // store's unique constraint reports the conflict.
        let target_id = Uuid::new_v4();

        let mut user_repo = MockUserRepository::new();
        user_repo
            .expect_find_by_username()
            .returning(move |_| Ok(Some(user(target_id, "target"))));
        user_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(user(id, "me"))));

        let mut follow_repo = MockFollowRepository::new();
        follow_repo.expect_exists_edge().returning(|_, _| Ok(false));
        follow_repo
            .expect_insert_edge()
            .returning(|_, _| Err(AppError::Conflict("duplicate key".to_string())));

        let err = service(follow_repo, user_repo)
            .follow(Uuid::new_v4(), "target")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
