use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::recruit::domain::value_objects::{
    ContactMethod, RecruitDuration, RecruitHeadcount, RecruitPosition, RecruitProgress,
    RecruitStatus, RecruitType,
};

/// A recruitment posting as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recruit {
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

impl Recruit {
    pub fn from_draft(author_id: Uuid, draft: RecruitDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            title: draft.title,
            content: draft.content,
            position: draft.position,
            recruit_type: draft.recruit_type,
            progress: draft.progress,
            tech_stacks: draft.tech_stacks,
            contact: draft.contact,
            contact_value: draft.contact_value,
            duration: draft.duration,
            headcount: draft.headcount,
            status: RecruitStatus::Open,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_draft(&mut self, draft: RecruitDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.position = draft.position;
        self.recruit_type = draft.recruit_type;
        self.progress = draft.progress;
        self.tech_stacks = draft.tech_stacks;
        self.contact = draft.contact;
        self.contact_value = draft.contact_value;
        self.duration = draft.duration;
        self.headcount = draft.headcount;
        self.updated_at = Utc::now();
    }
}

/// Incoming posting fields for create and update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruitDraft {
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
}

/// A posting as handed to a viewer, with the viewer's bookmark state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecruitView {
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
    pub bookmarked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecruitView {
    pub fn of(recruit: Recruit, bookmarked: bool) -> Self {
        Self {
            id: recruit.id,
            author_id: recruit.author_id,
            title: recruit.title,
            content: recruit.content,
            position: recruit.position,
            recruit_type: recruit.recruit_type,
            progress: recruit.progress,
            tech_stacks: recruit.tech_stacks,
            contact: recruit.contact,
            contact_value: recruit.contact_value,
            duration: recruit.duration,
            headcount: recruit.headcount,
            status: recruit.status,
            bookmarked,
            created_at: recruit.created_at,
            updated_at: recruit.updated_at,
        }
    }
}
