/// Cleanup scheduler
///
/// Ticks on a cron schedule and launches the cleanup job when the current
/// calendar date, in the configured timezone, equals the configured
/// execution date. Exact equality means the job fires on at most one day;
/// a process that is down for that whole day simply misses the run — there
/// is no catch-up.
use crate::modules::cleanup::config::CleanupConfig;
use crate::modules::cleanup::runner::{JobOutcome, JobRunner, RunParameters};
use crate::{log_error, log_info, log_warn};
use chrono::{NaiveDate, Utc};
use croner::Cron;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const CLEANUP_JOB_NAME: &str = "cleanup_deleted_rows";

pub struct CleanupScheduler {
    runner: Arc<dyn JobRunner>,
    config: CleanupConfig,
    in_flight: AtomicBool,
    stopped: AtomicBool,
}

impl CleanupScheduler {
    pub fn new(runner: Arc<dyn JobRunner>, config: CleanupConfig) -> Self {
        Self {
            runner,
            config,
            in_flight: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        }
    }

    /// One tick. Launches the job when `today` matches the configured date
    /// and no earlier invocation is still in flight; returns the outcome of
    /// a launched run, None otherwise. Failures are logged here and never
    /// escape to the tick loop.
    pub async fn run_if_due(&self, today: NaiveDate) -> Option<JobOutcome> {
        if today != self.config.execution_date {
            return None;
        }

        // Skip-if-running: a tick arriving mid-run is dropped, not queued
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log_warn!("Cleanup tick skipped: previous invocation still running");
            return None;
        }

        let outcome = self
            .runner
            .run(CLEANUP_JOB_NAME, RunParameters::fresh())
            .await;
        self.in_flight.store(false, Ordering::SeqCst);

        match &outcome {
            JobOutcome::Completed => {
                log_info!("Cleanup job executed for date: {}", today);
            }
            JobOutcome::Failed(cause) => {
                log_error!("Failed to execute cleanup job: {}", cause);
            }
        }

        Some(outcome)
    }

    /// Tick loop. Call with tokio::spawn; runs until `stop()`.
    pub async fn run(self: Arc<Self>) {
        let cron = match self.config.cron.parse::<Cron>() {
            Ok(cron) => cron,
            Err(e) => {
                log_error!(
                    "Invalid cleanup cron expression '{}': {}",
                    self.config.cron,
                    e
                );
                return;
            }
        };

        log_info!(
            "Cleanup scheduler started (cron '{}', zone {}, target date {})",
            self.config.cron,
            self.config.timezone.name(),
            self.config.execution_date
        );

        loop {
            if self.stopped.load(Ordering::SeqCst) {
                break;
            }

            let now = Utc::now().with_timezone(&self.config.timezone);
            let next = match cron.find_next_occurrence(&now, false) {
                Ok(next) => next,
                Err(e) => {
                    log_error!("No next occurrence for cleanup schedule: {}", e);
                    break;
                }
            };

            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
            tokio::time::sleep(wait).await;

            if self.stopped.load(Ordering::SeqCst) {
                break;
            }

            let today = Utc::now()
                .with_timezone(&self.config.timezone)
                .date_naive();
            self.run_if_due(today).await;
        }

        log_info!("Cleanup scheduler stopped");
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        log_info!("Cleanup scheduler stop requested");
    }
}
