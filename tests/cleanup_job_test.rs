/// Cleanup pipeline tests - scheduler, runner, and tasklet wired together
///
/// Tests cover:
/// - The date gate in the configured timezone (no early run, no catch-up)
/// - Same-day re-trigger as a distinct run
/// - Failure containment at the scheduler boundary
/// - Idempotence of the soft-delete sweep
mod utils;

use async_trait::async_trait;
use chrono::NaiveDate;
use devmate::modules::cleanup::{
    CleanupConfig, CleanupScheduler, JobOutcome, SoftDeleteTasklet, Tasklet, TaskletJobRunner,
};
use devmate::modules::recruit::{
    ContactMethod, RecruitDraft, RecruitDuration, RecruitHeadcount, RecruitPosition,
    RecruitProgress, RecruitService, RecruitType,
};
use devmate::shared::errors::{AppError, AppResult};
use std::sync::Arc;
use utils::fakes::FakeRecruitRepo;
use uuid::Uuid;

fn draft(title: &str) -> RecruitDraft {
    RecruitDraft {
        title: title.to_string(),
        content: "Weekend side project".to_string(),
        position: RecruitPosition::Backend,
        recruit_type: RecruitType::Project,
        progress: RecruitProgress::Online,
        tech_stacks: vec!["rust".to_string()],
        contact: ContactMethod::Email,
        contact_value: None,
        duration: RecruitDuration::ThreeMonths,
        headcount: RecruitHeadcount::Two,
    }
}

fn seoul_config(target: &str) -> CleanupConfig {
    CleanupConfig::new(
        NaiveDate::parse_from_str(target, "%Y-%m-%d").unwrap(),
        "0 0 * * *",
        chrono_tz::Asia::Seoul,
    )
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn scheduler_over(repo: Arc<FakeRecruitRepo>, target: &str) -> CleanupScheduler {
    let tasklet = Arc::new(SoftDeleteTasklet::new(repo));
    let runner = Arc::new(TaskletJobRunner::new(tasklet));
    CleanupScheduler::new(runner, seoul_config(target))
}

/// Target date 2025-03-01 in Asia/Seoul: the day before is a no-op, the day
/// itself runs, a same-day manual re-trigger runs again, and the day after
/// is a no-op because the comparison is equality - a process that was down
/// on the target date has missed its run for good (no catch-up).
#[tokio::test]
async fn scheduler_runs_on_exactly_the_configured_date() {
    let repo = FakeRecruitRepo::shared();
    let service = RecruitService::new(repo.clone());

    let author = Uuid::new_v4();
    let keep = service.create(author, draft("keep me")).await.unwrap();
    let doomed = service.create(author, draft("delete me")).await.unwrap();
    service.delete(author, doomed.id).await.unwrap();
    assert_eq!(repo.deleted_row_count(), 1);

    let scheduler = scheduler_over(repo.clone(), "2025-03-01");

    // 2025-02-28: date does not match, nothing happens
    assert!(scheduler.run_if_due(date("2025-02-28")).await.is_none());
    assert_eq!(repo.deleted_row_count(), 1);

    // 2025-03-01: the job runs and the flagged row is purged
    let outcome = scheduler.run_if_due(date("2025-03-01")).await;
    assert_eq!(outcome, Some(JobOutcome::Completed));
    assert_eq!(repo.deleted_row_count(), 0);
    assert_eq!(repo.total_row_count(), 1);

    // Same-day manual re-trigger: a distinct run, harmless on clean state
    let outcome = scheduler.run_if_due(date("2025-03-01")).await;
    assert_eq!(outcome, Some(JobOutcome::Completed));
    assert_eq!(repo.total_row_count(), 1);

    // 2025-03-02: the date has passed; no catch-up run
    assert!(scheduler.run_if_due(date("2025-03-02")).await.is_none());

    let remaining = service.find_all(None).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
}

#[tokio::test]
async fn sweep_is_idempotent_over_row_state() {
    let repo = FakeRecruitRepo::shared();
    let service = RecruitService::new(repo.clone());

    let author = Uuid::new_v4();
    let doomed = service.create(author, draft("delete me")).await.unwrap();
    service.delete(author, doomed.id).await.unwrap();

    let tasklet = SoftDeleteTasklet::new(repo.clone());

    tasklet.execute().await.unwrap();
    assert_eq!(repo.total_row_count(), 0);

    // Re-running after a completed sweep touches nothing
    tasklet.execute().await.unwrap();
    assert_eq!(repo.total_row_count(), 0);
}

struct ExplodingTasklet;

#[async_trait]
impl Tasklet for ExplodingTasklet {
    fn name(&self) -> &str {
        "exploding"
    }

    async fn execute(&self) -> AppResult<()> {
        Err(AppError::DatabaseError("relation vanished".to_string()))
    }
}

#[tokio::test]
async fn tasklet_failure_is_contained_at_the_scheduler() {
    let runner = Arc::new(TaskletJobRunner::new(Arc::new(ExplodingTasklet)));
    let scheduler = CleanupScheduler::new(runner, seoul_config("2025-03-01"));

    // The failure is folded into the outcome, never propagated
    let outcome = scheduler.run_if_due(date("2025-03-01")).await;
    assert!(matches!(outcome, Some(JobOutcome::Failed(_))));

    // Next day's non-matching tick is still an ordinary no-op
    assert!(scheduler.run_if_due(date("2025-03-02")).await.is_none());
}
