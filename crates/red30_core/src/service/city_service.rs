//! City use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass the repository's country-code validation.
//! - Service layer remains storage-agnostic.

use crate::model::city::{City, Country, NewCity};
use crate::repo::city_repo::{AddCityOutcome, CityRepository};
use crate::repo::{MutationOutcome, RepoResult};

/// Use-case service wrapper for city CRUD operations.
pub struct CityService<R: CityRepository> {
    repo: R,
}

impl<R: CityRepository> CityService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists the country reference rows in store order.
    pub fn list_countries(&self) -> RepoResult<Vec<Country>> {
        self.repo.list_countries()
    }

    /// Adds a city after country-code validation.
    ///
    /// # Contract
    /// - Unknown country code yields `AddCityOutcome::UnknownCountryCode`
    ///   and persists nothing.
    pub fn add_city(
        &self,
        name: impl Into<String>,
        country_code: impl Into<String>,
        district: impl Into<String>,
        population: i64,
    ) -> RepoResult<AddCityOutcome> {
        let city = NewCity::new(name, country_code, district, population);
        self.repo.add_city(&city)
    }

    /// Gets the first city whose name matches case-insensitively.
    pub fn get_city_by_name(&self, name: &str) -> RepoResult<Option<City>> {
        self.repo.get_city_by_name(name)
    }

    /// Sets the population on every city matching the name.
    pub fn update_city_population(
        &self,
        name: &str,
        population: i64,
    ) -> RepoResult<MutationOutcome> {
        self.repo.update_city_population(name, population)
    }

    /// Deletes every city matching the name.
    pub fn delete_city_by_name(&self, name: &str) -> RepoResult<MutationOutcome> {
        self.repo.delete_city_by_name(name)
    }
}
