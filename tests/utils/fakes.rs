/// In-memory repository fakes
///
/// Stand-ins for the Diesel repositories so the suite runs without a live
/// database. Each fake serializes check-and-write under one mutex, playing
/// the role the primary key plays in Postgres.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use devmate::modules::follow::{FollowEdge, FollowRepository};
use devmate::modules::recruit::{Recruit, RecruitRepository, RecruitStatus};
use devmate::modules::user::{ProfileChanges, User, UserRepository, UserSummary};
use devmate::shared::errors::{AppError, AppResult};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub fn user_named(username: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        name: username.to_string(),
        bio: None,
        profile_image_url: None,
        portfolio_url: None,
        phone: None,
        email: None,
        password_hash: User::hash_password("password123").unwrap(),
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
pub struct FakeUserRepo {
    users: Mutex<HashMap<Uuid, User>>,
}

impl FakeUserRepo {
    pub fn with_users(users: Vec<User>) -> Arc<Self> {
        let repo = Self::default();
        {
            let mut map = repo.users.lock().unwrap();
            for user in users {
                map.insert(user.id, user);
            }
        }
        Arc::new(repo)
    }
}

#[async_trait]
impl UserRepository for FakeUserRepo {
    async fn insert(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::Conflict(
                "duplicate key value violates unique constraint \"users_username_key\""
                    .to_string(),
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update_profile(&self, id: Uuid, changes: &ProfileChanges) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Record not found in database".to_string()))?;

        user.name = changes.name.clone();
        user.bio = changes.bio.clone();
        user.profile_image_url = changes.profile_image_url.clone();
        user.portfolio_url = changes.portfolio_url.clone();
        user.phone = changes.phone.clone();
        user.email = changes.email.clone();
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get_mut(&id) {
            user.password_hash = password_hash.to_string();
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<User>> {
        let query = query.to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| {
                u.username.to_lowercase().contains(&query)
                    || u.name.to_lowercase().contains(&query)
            })
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

pub struct FakeFollowRepo {
    edges: Mutex<HashSet<(Uuid, Uuid)>>,
    users: Arc<FakeUserRepo>,
}

impl FakeFollowRepo {
    pub fn new(users: Arc<FakeUserRepo>) -> Arc<Self> {
        Arc::new(Self {
            edges: Mutex::new(HashSet::new()),
            users,
        })
    }

    fn summaries_of(&self, ids: Vec<Uuid>) -> Vec<UserSummary> {
        let users = self.users.users.lock().unwrap();
        ids.into_iter()
            .filter_map(|id| users.get(&id).map(|u| u.summary()))
            .collect()
    }
}

#[async_trait]
impl FollowRepository for FakeFollowRepo {
    async fn insert_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<FollowEdge> {
        // Check-and-insert under the lock: the fake's stand-in for the
        // composite primary key
        let mut edges = self.edges.lock().unwrap();
        if !edges.insert((follower_id, following_id)) {
            return Err(AppError::Conflict(
                "duplicate key value violates unique constraint \"follows_pkey\"".to_string(),
            ));
        }
        Ok(FollowEdge {
            follower_id,
            following_id,
            created_at: Utc::now(),
        })
    }

    async fn delete_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<usize> {
        let removed = self
            .edges
            .lock()
            .unwrap()
            .remove(&(follower_id, following_id));
        Ok(removed as usize)
    }

    async fn exists_edge(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<bool> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .contains(&(follower_id, following_id)))
    }

    async fn count_by_following(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, following)| *following == user_id)
            .count() as i64)
    }

    async fn count_by_follower(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(follower, _)| *follower == user_id)
            .count() as i64)
    }

    async fn list_followers(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>> {
        let ids: Vec<Uuid> = self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, following)| *following == user_id)
            .map(|(follower, _)| *follower)
            .collect();
        Ok(self.summaries_of(ids))
    }

    async fn list_followings(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>> {
        let ids: Vec<Uuid> = self
            .edges
            .lock()
            .unwrap()
            .iter()
            .filter(|(follower, _)| *follower == user_id)
            .map(|(_, following)| *following)
            .collect();
        Ok(self.summaries_of(ids))
    }
}

#[derive(Default)]
pub struct FakeRecruitRepo {
    recruits: Mutex<HashMap<Uuid, Recruit>>,
    bookmarks: Mutex<HashSet<(Uuid, Uuid)>>,
}

impl FakeRecruitRepo {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn deleted_row_count(&self) -> usize {
        self.recruits
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.is_deleted)
            .count()
    }

    pub fn total_row_count(&self) -> usize {
        self.recruits.lock().unwrap().len()
    }
}

#[async_trait]
impl RecruitRepository for FakeRecruitRepo {
    async fn insert(&self, recruit: &Recruit) -> AppResult<Recruit> {
        self.recruits
            .lock()
            .unwrap()
            .insert(recruit.id, recruit.clone());
        Ok(recruit.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Recruit>> {
        Ok(self.recruits.lock().unwrap().get(&id).cloned())
    }

    async fn list_active(&self) -> AppResult<Vec<Recruit>> {
        let mut rows: Vec<Recruit> = self
            .recruits
            .lock()
            .unwrap()
            .values()
            .filter(|r| !r.is_deleted)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update(&self, recruit: &Recruit) -> AppResult<Recruit> {
        self.recruits
            .lock()
            .unwrap()
            .insert(recruit.id, recruit.clone());
        Ok(recruit.clone())
    }

    async fn set_status(&self, id: Uuid, status: RecruitStatus) -> AppResult<()> {
        if let Some(recruit) = self.recruits.lock().unwrap().get_mut(&id) {
            recruit.status = status;
            recruit.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn soft_delete(&self, id: Uuid, deleted_at: DateTime<Utc>) -> AppResult<()> {
        if let Some(recruit) = self.recruits.lock().unwrap().get_mut(&id) {
            recruit.is_deleted = true;
            recruit.deleted_at = Some(deleted_at);
        }
        Ok(())
    }

    async fn is_bookmarked(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<bool> {
        Ok(self
            .bookmarks
            .lock()
            .unwrap()
            .contains(&(user_id, recruit_id)))
    }

    async fn bookmarked_ids(&self, user_id: Uuid, recruit_ids: Vec<Uuid>) -> AppResult<Vec<Uuid>> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(recruit_ids
            .into_iter()
            .filter(|id| bookmarks.contains(&(user_id, *id)))
            .collect())
    }

    async fn insert_bookmark(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<()> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        if !bookmarks.insert((user_id, recruit_id)) {
            return Err(AppError::Conflict(
                "duplicate key value violates unique constraint \"recruit_bookmarks_pkey\""
                    .to_string(),
            ));
        }
        Ok(())
    }

    async fn delete_bookmark(&self, user_id: Uuid, recruit_id: Uuid) -> AppResult<usize> {
        let removed = self
            .bookmarks
            .lock()
            .unwrap()
            .remove(&(user_id, recruit_id));
        Ok(removed as usize)
    }

    async fn purge_soft_deleted(&self) -> AppResult<usize> {
        let mut recruits = self.recruits.lock().unwrap();
        let doomed: Vec<Uuid> = recruits
            .values()
            .filter(|r| r.is_deleted)
            .map(|r| r.id)
            .collect();

        for id in &doomed {
            recruits.remove(id);
        }

        // FK cascade: bookmarks of purged rows go too
        let mut bookmarks = self.bookmarks.lock().unwrap();
        bookmarks.retain(|(_, recruit_id)| !doomed.contains(recruit_id));

        Ok(doomed.len())
    }
}
