//! Repository implementation for customers.

use diesel::prelude::*;

use crate::{
    db::with_connection,
    domain::{
        customer::{Customer, NewCustomer},
        types::CustomerId,
    },
    models::customer::{
        Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
    },
    repository::{
        CustomerReader, CustomerWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let db_customer = with_connection(self.pool(), |conn| {
            customers::table
                .find(id.get())
                .select(DbCustomer::as_select())
                .first::<DbCustomer>(conn)
                .optional()
                .map_err(RepositoryError::from)
        })?;

        db_customer
            .map(Customer::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let db_customers = with_connection(self.pool(), |conn| {
            customers::table
                .order(customers::id.asc())
                .select(DbCustomer::as_select())
                .load::<DbCustomer>(conn)
                .map_err(RepositoryError::from)
        })?;

        db_customers
            .into_iter()
            .map(|customer| Customer::try_from(customer).map_err(RepositoryError::from))
            .collect()
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<CustomerId> {
        use crate::schema::customers;

        let db_new_customer: DbNewCustomer = new_customer.into();

        let id = with_connection(self.pool(), |conn| {
            diesel::insert_into(customers::table)
                .values(&db_new_customer)
                .returning(customers::id)
                .get_result::<i32>(conn)
                .map_err(RepositoryError::from)
        })?;

        CustomerId::new(id).map_err(RepositoryError::from)
    }

    fn update_customer(&self, customer: &Customer) -> RepositoryResult<usize> {
        use crate::schema::customers;

        let db_updates: DbUpdateCustomer = customer.into();

        with_connection(self.pool(), |conn| {
            diesel::update(customers::table.find(customer.id.get()))
                .set(&db_updates)
                .execute(conn)
                .map_err(RepositoryError::from)
        })
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<usize> {
        use crate::schema::customers;

        with_connection(self.pool(), |conn| {
            diesel::delete(customers::table.find(id.get()))
                .execute(conn)
                .map_err(RepositoryError::from)
        })
    }
}
