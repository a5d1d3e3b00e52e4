/// Recruit postings module
///
/// Team-member recruitment ads with enumerated metadata, owner-only
/// mutation, bookmarks, and soft delete. Soft-deleted rows stay in the
/// table, hidden from every read path, until the scheduled cleanup job
/// physically purges them.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::RecruitService;
pub use domain::{
    entities::{Recruit, RecruitDraft, RecruitView},
    repository::RecruitRepository,
    value_objects::{
        ContactMethod, EnumOption, RecruitDuration, RecruitHeadcount, RecruitPosition,
        RecruitProgress, RecruitStatus, RecruitType, TechStack,
    },
};
pub use infrastructure::RecruitRepositoryImpl;
