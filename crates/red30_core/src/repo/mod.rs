//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts over single tables.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository constructors verify the schema is ready before any query
//!   runs.
//! - "No matching row" is reported through result types, never through the
//!   error channel.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::Connection;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod city_repo;
pub mod salesperson_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "database schema version {actual_version} is behind required {expected_version}; \
                 run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<r2d2::Error> for RepoError {
    fn from(value: r2d2::Error) -> Self {
        Self::Db(DbError::Pool(value))
    }
}

/// Tagged outcome of a keyed update or delete.
///
/// Replaces a bare affected-count so callers cannot confuse "nothing
/// matched" with a store failure: the former is a value, the latter stays
/// on the error channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// No row matched the key.
    NotFound,
    /// One or more rows changed.
    Applied(usize),
}

impl MutationOutcome {
    pub(crate) fn from_changed_rows(changed: usize) -> Self {
        if changed == 0 {
            Self::NotFound
        } else {
            Self::Applied(changed)
        }
    }

    /// Numeric count of rows changed; zero on the not-found path.
    pub fn rows_affected(self) -> usize {
        match self {
            Self::NotFound => 0,
            Self::Applied(changed) => changed,
        }
    }

    pub fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Rejects connections whose schema is not ready for repository use.
///
/// # Invariants
/// - `PRAGMA user_version` must be at least the latest known migration.
/// - `table` and each of `columns` must exist.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version =
        conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if table_exists != 1 {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<HashSet<String>, _>>()?;
    for &column in columns {
        if !present.contains(column) {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::MutationOutcome;

    #[test]
    fn from_changed_rows_maps_zero_to_not_found() {
        assert_eq!(
            MutationOutcome::from_changed_rows(0),
            MutationOutcome::NotFound
        );
        assert_eq!(
            MutationOutcome::from_changed_rows(2),
            MutationOutcome::Applied(2)
        );
    }

    #[test]
    fn rows_affected_recovers_the_count() {
        assert_eq!(MutationOutcome::NotFound.rows_affected(), 0);
        assert_eq!(MutationOutcome::Applied(3).rows_affected(), 3);
        assert!(MutationOutcome::NotFound.is_not_found());
        assert!(!MutationOutcome::Applied(1).is_not_found());
    }
}
