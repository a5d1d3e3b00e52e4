/// Diesel models for the recruits and recruit_bookmarks tables
use crate::modules::recruit::domain::entities::Recruit;
use crate::modules::recruit::domain::value_objects::{
    ContactMethod, RecruitDuration, RecruitHeadcount, RecruitPosition, RecruitProgress,
    RecruitStatus, RecruitType,
};
use crate::schema::{recruit_bookmarks, recruits};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Diesel model for inserting new postings
#[derive(Insertable, Debug)]
#[diesel(table_name = recruits)]
pub struct NewRecruitRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub position: RecruitPosition,
    pub recruit_type: RecruitType,
    pub progress: RecruitProgress,
    pub tech_stacks: Vec<String>,
    pub contact: ContactMethod,
    pub contact_value: Option<String>,
    pub duration: RecruitDuration,
    pub headcount: RecruitHeadcount,
    pub status: RecruitStatus,
}

impl NewRecruitRow {
    pub fn from_recruit(recruit: &Recruit) -> Self {
        Self {
            id: recruit.id,
            author_id: recruit.author_id,
            title: recruit.title.clone(),
            content: recruit.content.clone(),
            position: recruit.position,
            recruit_type: recruit.recruit_type,
            progress: recruit.progress,
            tech_stacks: recruit.tech_stacks.clone(),
            contact: recruit.contact,
            contact_value: recruit.contact_value.clone(),
            duration: recruit.duration,
            headcount: recruit.headcount,
            status: recruit.status,
        }
    }
}

/// Diesel model for querying existing postings
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = recruits)]
pub struct RecruitModel {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub position: RecruitPosition,
    pub recruit_type: RecruitType,
    pub progress: RecruitProgress,
    pub tech_stacks: Vec<String>,
    pub contact: ContactMethod,
    pub contact_value: Option<String>,
    pub duration: RecruitDuration,
    pub headcount: RecruitHeadcount,
    pub status: RecruitStatus,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecruitModel {
    /// Convert to domain Recruit
    pub fn to_recruit(self) -> Recruit {
        Recruit {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            content: self.content,
            position: self.position,
            recruit_type: self.recruit_type,
            progress: self.progress,
            tech_stacks: self.tech_stacks,
            contact: self.contact,
            contact_value: self.contact_value,
            duration: self.duration,
            headcount: self.headcount,
            status: self.status,
            is_deleted: self.is_deleted,
            deleted_at: self.deleted_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Changeset for posting edits
#[derive(AsChangeset, Debug)]
#[diesel(table_name = recruits)]
#[diesel(treat_none_as_null = true)]
pub struct RecruitChangesRow {
    pub title: String,
    pub content: String,
    pub position: RecruitPosition,
    pub recruit_type: RecruitType,
    pub progress: RecruitProgress,
    pub tech_stacks: Vec<String>,
    pub contact: ContactMethod,
    pub contact_value: Option<String>,
    pub duration: RecruitDuration,
    pub headcount: RecruitHeadcount,
    pub updated_at: DateTime<Utc>,
}

impl RecruitChangesRow {
    pub fn from_recruit(recruit: &Recruit) -> Self {
        Self {
            title: recruit.title.clone(),
            content: recruit.content.clone(),
            position: recruit.position,
            recruit_type: recruit.recruit_type,
            progress: recruit.progress,
            tech_stacks: recruit.tech_stacks.clone(),
            contact: recruit.contact,
            contact_value: recruit.contact_value.clone(),
            duration: recruit.duration,
            headcount: recruit.headcount,
            updated_at: recruit.updated_at,
        }
    }
}

/// Diesel model for inserting bookmarks
#[derive(Insertable, Debug)]
#[diesel(table_name = recruit_bookmarks)]
pub struct NewBookmarkRow {
    pub user_id: Uuid,
    pub recruit_id: Uuid,
}
