pub mod errors;          // Shared error types
pub mod infrastructure;  // Shared infrastructure (database)
pub mod utils;           // Shared utilities

// Re-exports for convenience
pub use infrastructure::database::Database;
