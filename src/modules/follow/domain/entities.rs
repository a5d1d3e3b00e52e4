use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single directed follow relation. Present or absent; never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower_id: Uuid,
    pub following_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Aggregates for one user, derived from the edge set after a mutation or
/// on profile read. `is_following` is the caller's own relation to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowCounts {
    pub is_following: bool,
    pub follower_count: i64,
    pub following_count: i64,
}

impl FollowCounts {
    pub fn of(is_following: bool, follower_count: i64, following_count: i64) -> Self {
        Self {
            is_following,
            follower_count,
            following_count,
        }
    }
}
