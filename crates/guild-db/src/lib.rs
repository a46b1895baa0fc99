//! # guild-db
//!
//! Record store implementing the guild repository port with SQLite via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Schema bootstrap and idempotent example data
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guild_db::pool::{create_pool, DatabaseConfig};
//! use guild_db::{schema, SqliteGuildRepository};
//! use guild_core::traits::GuildRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: "sqlite://guilds.db".to_string(),
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     schema::initialize(&pool, true).await?;
//!     let guild_repo = SqliteGuildRepository::new(pool);
//!
//!     let guilds = guild_repo.list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, SqlitePool, IN_MEMORY_URL};
pub use repositories::SqliteGuildRepository;
