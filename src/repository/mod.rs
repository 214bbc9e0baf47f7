//! Persistence boundary for customer records.
//!
//! Services depend on the reader/writer traits only; [`DieselRepository`] is
//! the SQLite-backed implementation wired up at startup.

use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read access to stored customers.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

/// Write access to stored customers.
///
/// No existence checks happen here: update and delete report the number of
/// affected rows and leave interpretation to the caller.
pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<CustomerId>;
    fn update_customer(&self, customer: &Customer) -> RepositoryResult<usize>;
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<usize>;
}

/// Diesel-backed repository sharing a connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
