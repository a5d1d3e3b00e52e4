/// Diesel models for the follows table
use crate::modules::follow::domain::entities::FollowEdge;
use crate::schema::follows;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Diesel model for inserting new edges
#[derive(Insertable, Debug)]
#[diesel(table_name = follows)]
pub struct NewFollowRow {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}

/// Diesel model for querying existing edges
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = follows)]
pub struct FollowRow {
    pub follower_id: Uuid,
    pub following_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FollowRow {
    /// Convert to domain FollowEdge
    pub fn to_edge(self) -> FollowEdge {
        FollowEdge {
            follower_id: self.follower_id,
            following_id: self.following_id,
            created_at: self.created_at,
        }
    }
}
