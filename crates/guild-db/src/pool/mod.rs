//! Database connection pool management

mod sqlite;

pub use sqlite::{create_pool, DatabaseConfig, IN_MEMORY_URL};

// Re-export SqlitePool for convenience
pub use sqlx::sqlite::SqlitePool;
