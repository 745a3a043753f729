//! Runtime configuration for storage and logging.
//!
//! # Responsibility
//! - Hold the database location and pool sizing as an explicit value that
//!   callers construct and pass down.
//!
//! # Invariants
//! - No process-global mutable configuration: every pool and repository is
//!   built from a `StoreConfig` instance handed to it.

use crate::db::{create_pool, DbPool, DbResult, PoolConfig};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default local file-backed database.
pub const DEFAULT_DB_FILE: &str = "red30.db";

const DEFAULT_MAX_CONNECTIONS: u32 = 4;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Storage configuration, deserializable from host-app settings.
///
/// Missing fields fall back to their defaults, so a partial document like
/// `{"db_path": "some/other.db"}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// Upper bound on concurrently held pool connections.
    pub max_connections: u32,
    /// SQLite busy handler timeout, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Pool knobs derived from this configuration.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.max_connections,
            busy_timeout: Duration::from_millis(self.busy_timeout_ms),
        }
    }

    /// Opens the configured database behind a managed pool, applying any
    /// pending migrations.
    pub fn open_pool(&self) -> DbResult<DbPool> {
        create_pool(&self.db_path, &self.pool_config())
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DEFAULT_DB_FILE};
    use std::path::PathBuf;

    #[test]
    fn default_points_at_local_file_backed_db() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
        assert!(config.max_connections > 0);
    }

    #[test]
    fn partial_document_fills_missing_fields_with_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"db_path": "world_test.db"}"#).unwrap();
        assert_eq!(config.db_path, PathBuf::from("world_test.db"));
        assert_eq!(config.max_connections, StoreConfig::default().max_connections);
        assert_eq!(config.busy_timeout_ms, StoreConfig::default().busy_timeout_ms);
    }
}
