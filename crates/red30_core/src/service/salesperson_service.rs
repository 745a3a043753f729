//! Salesperson use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.

use crate::model::salesperson::{SalesPerson, SalesPersonId};
use crate::repo::salesperson_repo::SalesPersonRepository;
use crate::repo::{MutationOutcome, RepoResult};

/// Use-case service wrapper for salesperson CRUD operations.
pub struct SalesPersonService<R: SalesPersonRepository> {
    repo: R,
}

impl<R: SalesPersonRepository> SalesPersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a salesperson to the roster and returns the assigned id.
    pub fn create_salesperson(
        &self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> RepoResult<SalesPersonId> {
        let person = SalesPerson::new(first_name, last_name, email_address, city, state);
        self.repo.create_salesperson(&person)
    }

    /// Gets the first salesperson matching both names exactly.
    pub fn read_salesperson(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> RepoResult<Option<SalesPerson>> {
        self.repo.read_salesperson(first_name, last_name)
    }

    /// Lists the whole roster in store order.
    pub fn read_salespersons(&self) -> RepoResult<Vec<SalesPerson>> {
        self.repo.read_salespersons()
    }

    /// Moves every salesperson with this email to a new city/state.
    pub fn update_salesperson(
        &self,
        email_address: &str,
        new_city: &str,
        new_state: &str,
    ) -> RepoResult<MutationOutcome> {
        self.repo
            .update_salesperson(email_address, new_city, new_state)
    }

    /// Removes every salesperson with this email from the roster.
    pub fn delete_salesperson(&self, email_address: &str) -> RepoResult<MutationOutcome> {
        self.repo.delete_salesperson(email_address)
    }
}
