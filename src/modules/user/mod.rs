/// User module
///
/// Owns user identities and profile data. Usernames are unique and immutable
/// once created; other modules reference users by id only.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::service::UserService;
pub use domain::{
    entities::{NewUser, ProfileChanges, User, UserProfile, UserSummary},
    repository::UserRepository,
};
pub use infrastructure::UserRepositoryImpl;
