use crate::log_error;
use crate::modules::cleanup::tasklet::Tasklet;
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Parameters for one job invocation. A fresh timestamp per launch keeps
/// two runs on the same calendar day distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    pub timestamp: DateTime<Utc>,
}

impl RunParameters {
    pub fn fresh() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    Failed(String),
}

impl JobOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, JobOutcome::Completed)
    }
}

/// Executes a named unit of work. Never returns an error: failures are
/// folded into the outcome so callers at the scheduling boundary cannot
/// accidentally re-throw them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRunner: Send + Sync {
    async fn run(&self, job_name: &str, parameters: RunParameters) -> JobOutcome;
}

/// Runs a single tasklet as the whole job
pub struct TaskletJobRunner {
    tasklet: Arc<dyn Tasklet>,
}

impl TaskletJobRunner {
    pub fn new(tasklet: Arc<dyn Tasklet>) -> Self {
        Self { tasklet }
    }
}

#[async_trait]
impl JobRunner for TaskletJobRunner {
    async fn run(&self, job_name: &str, parameters: RunParameters) -> JobOutcome {
        LogContext::job_run(job_name, "starting", None);
        let start = std::time::Instant::now();

        match self.tasklet.execute().await {
            Ok(()) => {
                let duration = start.elapsed().as_millis() as u64;
                LogContext::job_run(job_name, "completed", Some(duration));
                JobOutcome::Completed
            }
            Err(e) => {
                log_error!(
                    "Job {} (run at {}) failed: {}",
                    job_name,
                    parameters.timestamp,
                    e
                );
                JobOutcome::Failed(e.to_string())
            }
        }
    }
}
