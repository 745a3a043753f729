//! Salesperson repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide passthrough CRUD APIs over the `SalesPerson` table.
//!
//! # Invariants
//! - No validation on any write path; store failures propagate unchanged.
//! - Name and email matching is exact; neither key is unique, so keyed
//!   mutations touch every matching row.

use crate::db::{DbPool, PooledConn};
use crate::model::salesperson::{SalesPerson, SalesPersonId};
use crate::repo::{ensure_connection_ready, MutationOutcome, RepoResult};
use rusqlite::{params, Row};

const SALESPERSON_SELECT_SQL: &str =
    "SELECT first_name, last_name, email_address, city, state FROM SalesPerson";

/// Repository interface for salesperson CRUD operations.
pub trait SalesPersonRepository {
    fn create_salesperson(&self, person: &SalesPerson) -> RepoResult<SalesPersonId>;
    fn read_salesperson(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<Option<SalesPerson>>;
    fn read_salespersons(&self) -> RepoResult<Vec<SalesPerson>>;
    fn update_salesperson(
        &self,
        email_address: &str,
        new_city: &str,
        new_state: &str,
    ) -> RepoResult<MutationOutcome>;
    fn delete_salesperson(&self, email_address: &str) -> RepoResult<MutationOutcome>;
}

/// SQLite-backed salesperson repository with scoped connection acquisition.
pub struct SqliteSalesPersonRepository {
    pool: DbPool,
}

impl SqliteSalesPersonRepository {
    /// Constructs a repository after verifying the pool's database carries
    /// the `SalesPerson` table in its expected shape.
    pub fn try_new(pool: DbPool) -> RepoResult<Self> {
        let conn = pool.get()?;
        ensure_connection_ready(
            &conn,
            "SalesPerson",
            &["first_name", "last_name", "email_address", "city", "state"],
        )?;
        drop(conn);
        Ok(Self { pool })
    }

    fn conn(&self) -> RepoResult<PooledConn> {
        Ok(self.pool.get()?)
    }
}

impl SalesPersonRepository for SqliteSalesPersonRepository {
    fn create_salesperson(&self, person: &SalesPerson) -> RepoResult<SalesPersonId> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO SalesPerson (first_name, last_name, email_address, city, state)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                person.first_name,
                person.last_name,
                person.email_address,
                person.city,
                person.state,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn read_salesperson(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<Option<SalesPerson>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            "{SALESPERSON_SELECT_SQL}
             WHERE first_name = ?1
               AND last_name = ?2;"
        ))?;
        let mut rows = stmt.query(params![first_name, last_name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_salesperson_row(row)?));
        }

        Ok(None)
    }

    fn read_salespersons(&self) -> RepoResult<Vec<SalesPerson>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!("{SALESPERSON_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();

        while let Some(row) = rows.next()? {
            persons.push(parse_salesperson_row(row)?);
        }

        Ok(persons)
    }

    fn update_salesperson(
        &self,
        email_address: &str,
        new_city: &str,
        new_state: &str,
    ) -> RepoResult<MutationOutcome> {
        let conn = self.conn()?;

        let changed = conn.execute(
            "UPDATE SalesPerson
             SET city = ?2, state = ?3
             WHERE email_address = ?1;",
            params![email_address, new_city, new_state],
        )?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }

    fn delete_salesperson(&self, email_address: &str) -> RepoResult<MutationOutcome> {
        let conn = self.conn()?;

        let changed = conn.execute(
            "DELETE FROM SalesPerson WHERE email_address = ?1;",
            [email_address],
        )?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }
}

fn parse_salesperson_row(row: &Row<'_>) -> RepoResult<SalesPerson> {
    Ok(SalesPerson {
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email_address: row.get("email_address")?,
        city: row.get("city")?,
        state: row.get("state")?,
    })
}
