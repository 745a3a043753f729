//! Managed connection pool over the SQLite database file.
//!
//! # Responsibility
//! - Build a bounded `r2d2` pool whose connections are ready for repository
//!   use: pragmas applied, migrations current.
//! - Keep acquisition scoped: one connection per operation, released on all
//!   exit paths.
//!
//! # Invariants
//! - Every pooled connection has `foreign_keys = ON` and a busy timeout.
//! - `create_pool` returns only after all pending migrations applied.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::{Duration, Instant};

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type PooledConn = r2d2::PooledConnection<SqliteConnectionManager>;

const DEFAULT_MAX_CONNECTIONS: u32 = 4;
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Sizing and timeout knobs for the connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Upper bound on concurrently held connections.
    pub max_connections: u32,
    /// SQLite busy handler timeout applied to every connection.
    pub busy_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

/// Opens a SQLite database file behind a managed pool and applies all
/// pending migrations.
///
/// # Side effects
/// - Creates the database file when absent.
/// - Emits `db_pool_open` logging events with duration and status.
pub fn create_pool(path: impl AsRef<Path>, config: &PoolConfig) -> DbResult<DbPool> {
    let started_at = Instant::now();
    info!(
        "event=db_pool_open module=db status=start max_connections={}",
        config.max_connections
    );

    let busy_timeout = config.busy_timeout;
    let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(busy_timeout)?;
        Ok(())
    });

    let pool = match r2d2::Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
    {
        Ok(pool) => pool,
        Err(err) => {
            error!(
                "event=db_pool_open module=db status=error duration_ms={} error_code=pool_build_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    let mut conn = pool.get().map_err(|err| {
        error!(
            "event=db_pool_open module=db status=error duration_ms={} error_code=pool_checkout_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        err
    })?;

    if let Err(err) = apply_migrations(&mut conn) {
        error!(
            "event=db_pool_open module=db status=error duration_ms={} error_code=db_migrate_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }
    drop(conn);

    info!(
        "event=db_pool_open module=db status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(pool)
}
