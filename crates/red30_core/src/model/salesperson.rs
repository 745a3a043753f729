//! Sales roster records.

use serde::{Deserialize, Serialize};

/// Implicit rowid of a `SalesPerson` row; the table declares no key of its
/// own.
pub type SalesPersonId = i64;

/// One salesperson on the roster.
///
/// `email_address` is the lookup key for update/delete; `(first_name,
/// last_name)` is the read key. Neither is enforced unique by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPerson {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub city: String,
    pub state: String,
}

impl SalesPerson {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}
