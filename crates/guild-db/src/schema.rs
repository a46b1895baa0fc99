//! Schema bootstrap and example data
//!
//! There are no migrations: the table is created if missing and the example
//! guilds are inserted with `INSERT OR IGNORE`, so running this on every
//! startup is safe.

use sqlx::SqlitePool;
use tracing::{info, instrument};

/// Guilds inserted on first startup
pub const SEED_GUILDS: [(&str, i64); 3] = [
    ("Knights of Valor", 5),
    ("Mystic Weavers", 3),
    ("Iron Legion", 4),
];

const CREATE_GUILDS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS guilds (
        guild_id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT    NOT NULL UNIQUE,
        level      INTEGER NOT NULL DEFAULT 1 CHECK (level >= 1),
        created_at TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";

/// Create the guilds table if it does not exist
#[instrument(skip(pool))]
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_GUILDS_TABLE).execute(pool).await?;
    info!("Table 'guilds' checked/created");
    Ok(())
}

/// Insert the example guilds, skipping any that already exist
///
/// Returns the number of rows actually inserted.
#[instrument(skip(pool))]
pub async fn seed_guilds(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for (name, level) in SEED_GUILDS {
        let result = sqlx::query("INSERT OR IGNORE INTO guilds (name, level) VALUES (?1, ?2)")
            .bind(name)
            .bind(level)
            .execute(pool)
            .await?;
        inserted += result.rows_affected();
    }
    info!(inserted, "Seed guilds applied");
    Ok(inserted)
}

/// Create the schema and optionally seed it
pub async fn initialize(pool: &SqlitePool, seed: bool) -> Result<(), sqlx::Error> {
    create_tables(pool).await?;
    if seed {
        seed_guilds(pool).await?;
    }
    Ok(())
}
