/// Scheduled cleanup module
///
/// A cron-driven scheduler that, on exactly one configured calendar date,
/// launches a batch job physically purging soft-deleted rows.
///
/// Architecture:
/// - Config: immutable, read once at startup
/// - Tasklet: the unit of work (soft-delete sweep), idempotent
/// - Runner: executes a named tasklet inside a logged boundary
/// - Scheduler: tick loop with the date gate and re-entrancy guard
pub mod config;
pub mod runner;
pub mod scheduler;
pub mod tasklet;

// Re-exports for easy access
pub use config::CleanupConfig;
pub use runner::{JobOutcome, JobRunner, RunParameters, TaskletJobRunner};
pub use scheduler::CleanupScheduler;
pub use tasklet::{SoftDeleteTasklet, Tasklet};
