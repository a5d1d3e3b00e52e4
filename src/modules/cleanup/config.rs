use chrono::NaiveDate;
use chrono_tz::Tz;
use std::env;

use crate::shared::errors::{AppError, AppResult};

const DEFAULT_CRON: &str = "0 0 * * *";
const DEFAULT_TIMEZONE: &str = "Asia/Seoul";

/// Cleanup job configuration, loaded once at process start and immutable
/// afterwards. Changing the execution date means redeploying.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// The one calendar date the job fires on, in `timezone`.
    pub execution_date: NaiveDate,
    /// Cron expression for the tick schedule.
    pub cron: String,
    /// Day boundaries are evaluated in this zone, not UTC.
    pub timezone: Tz,
}

impl CleanupConfig {
    pub fn new(execution_date: NaiveDate, cron: &str, timezone: Tz) -> Self {
        Self {
            execution_date,
            cron: cron.to_string(),
            timezone,
        }
    }

    pub fn from_env() -> AppResult<Self> {
        let date = env::var("CLEANUP_EXECUTION_DATE").map_err(|_| {
            AppError::InternalError("CLEANUP_EXECUTION_DATE is not set".to_string())
        })?;
        let execution_date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;

        let cron = env::var("CLEANUP_CRON").unwrap_or_else(|_| DEFAULT_CRON.to_string());

        let tz_name = env::var("CLEANUP_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("Unknown timezone '{}'", tz_name)))?;

        Ok(Self {
            execution_date,
            cron,
            timezone,
        })
    }
}
