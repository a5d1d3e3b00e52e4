use devmate::modules::cleanup::{
    CleanupConfig, CleanupScheduler, SoftDeleteTasklet, TaskletJobRunner,
};
use devmate::modules::recruit::RecruitRepositoryImpl;
use devmate::shared::utils::logger;
use devmate::shared::Database;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    logger::init_logger();

    let cleanup_config = CleanupConfig::from_env()?;
    let database = Database::new()?;

    {
        let mut conn = database.get_connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("Failed to run database migrations: {}", e))?;
        log::info!("Database migrations completed successfully");
    }

    let recruit_repo = Arc::new(RecruitRepositoryImpl::new(database.pool().clone()));
    let tasklet = Arc::new(SoftDeleteTasklet::new(recruit_repo));
    let runner = Arc::new(TaskletJobRunner::new(tasklet));
    let scheduler = Arc::new(CleanupScheduler::new(runner, cleanup_config));

    let scheduler_handle = tokio::spawn(scheduler.clone().run());
    log::info!("devmate core started; press Ctrl-C to stop");

    tokio::signal::ctrl_c().await?;

    scheduler.stop();
    scheduler_handle.abort();
    log::info!("devmate core shut down");

    Ok(())
}
