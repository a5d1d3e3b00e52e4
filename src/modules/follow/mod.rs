/// Follow graph module
///
/// Maintains directed follower/following edges between users and derives
/// aggregate counts from the edge set. Counts are never stored as mutable
/// counters; every read recomputes from the edges so they cannot drift.
///
/// Architecture:
/// - Domain: edge/count types and the store trait
/// - Application: FollowService with the graph invariants
/// - Infrastructure: Diesel-based store over the follows table
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::FollowService;
pub use domain::{
    entities::{FollowCounts, FollowEdge},
    repository::FollowRepository,
};
pub use infrastructure::FollowRepositoryImpl;
