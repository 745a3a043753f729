//! Core data-access layer for Red30 sales records and world reference data.
//! This crate is the single source of truth for persistence contracts.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging};
pub use model::city::{City, CityId, Country, NewCity};
pub use model::salesperson::{SalesPerson, SalesPersonId};
pub use repo::city_repo::{AddCityOutcome, CityRepository, SqliteCityRepository};
pub use repo::salesperson_repo::{SalesPersonRepository, SqliteSalesPersonRepository};
pub use repo::{MutationOutcome, RepoError, RepoResult};
pub use service::city_service::CityService;
pub use service::salesperson_service::SalesPersonService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
