use crate::modules::recruit::domain::repository::RecruitRepository;
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};
use async_trait::async_trait;
use std::sync::Arc;

/// A single unit of batch work
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Tasklet: Send + Sync {
    fn name(&self) -> &str;

    /// Must be safe to invoke again after a partial failure: the work is a
    /// function of current row state, never of rows touched in an earlier
    /// attempt.
    async fn execute(&self) -> AppResult<()>;
}

/// Physically removes rows that were soft-deleted by their owners.
pub struct SoftDeleteTasklet {
    recruit_repo: Arc<dyn RecruitRepository>,
}

impl SoftDeleteTasklet {
    pub fn new(recruit_repo: Arc<dyn RecruitRepository>) -> Self {
        Self { recruit_repo }
    }
}

#[async_trait]
impl Tasklet for SoftDeleteTasklet {
    fn name(&self) -> &str {
        "soft_delete_cleanup"
    }

    async fn execute(&self) -> AppResult<()> {
        log_debug!("Starting soft-delete sweep");

        let purged = self.recruit_repo.purge_soft_deleted().await?;

        log_info!("Soft-delete sweep removed {} rows", purged);
        Ok(())
    }
}
