//! City/country repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `city` table.
//! - Validate city inserts against the read-only `country` reference table.
//!
//! # Invariants
//! - `add_city` writes nothing when the country code has no exact,
//!   case-sensitive match in `country`.
//! - Name-based reads and mutations match case-insensitively and touch
//!   every matching row; city names are not unique.

use crate::db::{DbPool, PooledConn};
use crate::model::city::{City, CityId, Country, NewCity};
use crate::repo::{ensure_connection_ready, MutationOutcome, RepoResult};
use rusqlite::{params, Connection, Row};

const CITY_SELECT_SQL: &str = "SELECT id, name, countrycode, district, population FROM city";

/// Tagged outcome of a validated city insert.
///
/// An unknown country code is a value, not an error: no row is written and
/// the store is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCityOutcome {
    /// Row inserted; carries the store-assigned id.
    Created(CityId),
    /// Country code had no exact match in the reference table.
    UnknownCountryCode,
}

impl AddCityOutcome {
    /// The new row's id, or `None` when validation rejected the insert.
    pub fn created_id(self) -> Option<CityId> {
        match self {
            Self::Created(id) => Some(id),
            Self::UnknownCountryCode => None,
        }
    }
}

/// Repository interface for city CRUD operations.
pub trait CityRepository {
    fn list_countries(&self) -> RepoResult<Vec<Country>>;
    fn add_city(&self, city: &NewCity) -> RepoResult<AddCityOutcome>;
    fn get_city_by_name(&self, name: &str) -> RepoResult<Option<City>>;
    fn update_city_population(&self, name: &str, population: i64)
        -> RepoResult<MutationOutcome>;
    fn delete_city_by_name(&self, name: &str) -> RepoResult<MutationOutcome>;
}

/// SQLite-backed city repository with scoped connection acquisition.
pub struct SqliteCityRepository {
    pool: DbPool,
}

impl SqliteCityRepository {
    /// Constructs a repository after verifying the pool's database carries
    /// the `country` and `city` tables in their expected shape.
    pub fn try_new(pool: DbPool) -> RepoResult<Self> {
        let conn = pool.get()?;
        ensure_connection_ready(&conn, "country", &["code", "name"])?;
        ensure_connection_ready(
            &conn,
            "city",
            &["id", "name", "countrycode", "district", "population"],
        )?;
        drop(conn);
        Ok(Self { pool })
    }

    fn conn(&self) -> RepoResult<PooledConn> {
        Ok(self.pool.get()?)
    }
}

impl CityRepository for SqliteCityRepository {
    fn list_countries(&self) -> RepoResult<Vec<Country>> {
        let conn = self.conn()?;
        countries_on(&conn)
    }

    fn add_city(&self, city: &NewCity) -> RepoResult<AddCityOutcome> {
        let conn = self.conn()?;

        // Exact, case-sensitive code match; one read before the
        // conditional write, both on the same scoped connection.
        let countries = countries_on(&conn)?;
        if !countries
            .iter()
            .any(|country| country.code == city.country_code)
        {
            return Ok(AddCityOutcome::UnknownCountryCode);
        }

        conn.execute(
            "INSERT INTO city (name, countrycode, district, population)
             VALUES (?1, ?2, ?3, ?4);",
            params![city.name, city.country_code, city.district, city.population],
        )?;

        Ok(AddCityOutcome::Created(conn.last_insert_rowid()))
    }

    fn get_city_by_name(&self, name: &str) -> RepoResult<Option<City>> {
        let conn = self.conn()?;
        let needle = name.to_lowercase();

        let mut stmt = conn.prepare(&format!("{CITY_SELECT_SQL} WHERE LOWER(name) = ?1;"))?;
        let mut rows = stmt.query([needle.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_city_row(row)?));
        }

        Ok(None)
    }

    fn update_city_population(
        &self,
        name: &str,
        population: i64,
    ) -> RepoResult<MutationOutcome> {
        let conn = self.conn()?;
        let needle = name.to_lowercase();

        let changed = conn.execute(
            "UPDATE city SET population = ?2 WHERE LOWER(name) = ?1;",
            params![needle, population],
        )?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }

    fn delete_city_by_name(&self, name: &str) -> RepoResult<MutationOutcome> {
        let conn = self.conn()?;
        let needle = name.to_lowercase();

        let changed = conn.execute("DELETE FROM city WHERE LOWER(name) = ?1;", [needle])?;

        Ok(MutationOutcome::from_changed_rows(changed))
    }
}

fn countries_on(conn: &Connection) -> RepoResult<Vec<Country>> {
    let mut stmt = conn.prepare("SELECT code, name FROM country;")?;
    let mut rows = stmt.query([])?;
    let mut countries = Vec::new();

    while let Some(row) = rows.next()? {
        countries.push(Country {
            code: row.get("code")?,
            name: row.get("name")?,
        });
    }

    Ok(countries)
}

fn parse_city_row(row: &Row<'_>) -> RepoResult<City> {
    Ok(City {
        id: row.get("id")?,
        name: row.get("name")?,
        country_code: row.get("countrycode")?,
        district: row.get("district")?,
        population: row.get("population")?,
    })
}
