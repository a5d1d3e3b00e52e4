use crate::modules::recruit::domain::entities::{Recruit, RecruitDraft, RecruitView};
use crate::modules::recruit::domain::repository::RecruitRepository;
use crate::modules::recruit::domain::value_objects::{
    ContactMethod, EnumOption, RecruitDuration, RecruitHeadcount, RecruitPosition,
    RecruitProgress, RecruitStatus, RecruitType, TechStack,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct RecruitService {
    recruit_repo: Arc<dyn RecruitRepository>,
}

impl RecruitService {
    pub fn new(recruit_repo: Arc<dyn RecruitRepository>) -> Self {
        Self { recruit_repo }
    }

    fn validate_draft(draft: &RecruitDraft) -> AppResult<()> {
        Validator::validate_recruit_title(&draft.title)?;
        Validator::validate_recruit_content(&draft.content)?;

        for stack in &draft.tech_stacks {
            if !TechStack::is_known(stack) {
                return Err(AppError::ValidationError(format!(
                    "Unknown tech stack '{}'",
                    stack
                )));
            }
        }
        Ok(())
    }

    /// Fetch a posting that is visible to readers. Soft-deleted rows look
    /// exactly like missing ones from the outside.
    async fn find_visible(&self, id: Uuid) -> AppResult<Recruit> {
        let recruit = self
            .recruit_repo
            .find_by_id(id)
            .await?
            .filter(|r| !r.is_deleted)
            .ok_or_else(|| AppError::NotFound(format!("Recruit {} not found", id)))?;

        Ok(recruit)
    }

    async fn find_owned(&self, caller_id: Uuid, id: Uuid) -> AppResult<Recruit> {
        let recruit = self.find_visible(id).await?;

        if recruit.author_id != caller_id {
            return Err(AppError::Unauthorized(
                "Only the author can modify this posting".to_string(),
            ));
        }

        Ok(recruit)
    }

    pub async fn create(&self, author_id: Uuid, draft: RecruitDraft) -> AppResult<RecruitView> {
        Self::validate_draft(&draft)?;

        let recruit = Recruit::from_draft(author_id, draft);
        let saved = self.recruit_repo.insert(&recruit).await?;

        log_info!("User {} created recruit '{}'", author_id, saved.title);
        Ok(RecruitView::of(saved, false))
    }

    pub async fn find_all(&self, viewer_id: Option<Uuid>) -> AppResult<Vec<RecruitView>> {
        let recruits = self.recruit_repo.list_active().await?;

        let bookmarked = match viewer_id {
            Some(viewer) => {
                let ids = recruits.iter().map(|r| r.id).collect();
                self.recruit_repo.bookmarked_ids(viewer, ids).await?
            }
            None => Vec::new(),
        };

        Ok(recruits
            .into_iter()
            .map(|r| {
                let is_bookmarked = bookmarked.contains(&r.id);
                RecruitView::of(r, is_bookmarked)
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: Uuid, viewer_id: Option<Uuid>) -> AppResult<RecruitView> {
        let recruit = self.find_visible(id).await?;

        let bookmarked = match viewer_id {
            Some(viewer) => self.recruit_repo.is_bookmarked(viewer, id).await?,
            None => false,
        };

        Ok(RecruitView::of(recruit, bookmarked))
    }

    pub async fn update(
        &self,
        caller_id: Uuid,
        id: Uuid,
        draft: RecruitDraft,
    ) -> AppResult<RecruitView> {
        Self::validate_draft(&draft)?;

        let mut recruit = self.find_owned(caller_id, id).await?;
        recruit.apply_draft(draft);

        let updated = self.recruit_repo.update(&recruit).await?;
        let bookmarked = self.recruit_repo.is_bookmarked(caller_id, id).await?;

        Ok(RecruitView::of(updated, bookmarked))
    }

    /// Soft delete: the row stays until the scheduled cleanup purges it.
    pub async fn delete(&self, caller_id: Uuid, id: Uuid) -> AppResult<()> {
        let recruit = self.find_owned(caller_id, id).await?;

        self.recruit_repo
            .soft_delete(recruit.id, Utc::now())
            .await?;

        log_info!("User {} soft-deleted recruit {}", caller_id, id);
        Ok(())
    }

    pub async fn toggle_status(&self, caller_id: Uuid, id: Uuid) -> AppResult<RecruitStatus> {
        let recruit = self.find_owned(caller_id, id).await?;

        let new_status = recruit.status.toggled();
        self.recruit_repo.set_status(recruit.id, new_status).await?;

        log_debug!("Recruit {} status changed to {}", id, new_status);
        Ok(new_status)
    }

    pub async fn toggle_bookmark(&self, user_id: Uuid, id: Uuid) -> AppResult<bool> {
        // Resolve first so bookmarking a deleted posting reads as NotFound
        self.find_visible(id).await?;

        if self.recruit_repo.is_bookmarked(user_id, id).await? {
            self.recruit_repo.delete_bookmark(user_id, id).await?;
            Ok(false)
        } else {
            self.recruit_repo.insert_bookmark(user_id, id).await?;
            Ok(true)
        }
    }

    // Select options for posting forms

    pub fn positions() -> Vec<EnumOption> {
        RecruitPosition::options()
    }

    pub fn recruit_types() -> Vec<EnumOption> {
        RecruitType::options()
    }

    pub fn progress_types() -> Vec<EnumOption> {
        RecruitProgress::options()
    }

    pub fn tech_stacks() -> Vec<EnumOption> {
        TechStack::options()
    }

    pub fn contact_methods() -> Vec<EnumOption> {
        ContactMethod::options()
    }

    pub fn durations() -> Vec<EnumOption> {
        RecruitDuration::options()
    }

    pub fn headcounts() -> Vec<EnumOption> {
        RecruitHeadcount::options()
    }
}
