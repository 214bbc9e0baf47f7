//! Customer lifecycle orchestration.
//!
//! Lookups by id take the raw path value; identifiers that can never exist
//! (zero or negative) are reported as absent, the same as unknown ones.

use crate::domain::customer::{Customer, CustomerUpdate, NewCustomer};
use crate::domain::types::CustomerId;
use crate::forms::customer::{CreateCustomerForm, UpdateCustomerForm};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::ServiceResult;

/// Validates the payload, persists a new customer and returns its id.
pub fn create_customer<R>(repo: &R, form: CreateCustomerForm) -> ServiceResult<CustomerId>
where
    R: CustomerWriter + ?Sized,
{
    let new_customer = NewCustomer::try_from(form)?;

    let customer_id = repo.create_customer(&new_customer)?;
    log::info!("Created customer {customer_id}");

    Ok(customer_id)
}

/// Fetches a customer by its identifier.
pub fn get_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Option<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let Ok(customer_id) = CustomerId::new(customer_id) else {
        return Ok(None);
    };

    Ok(repo.get_customer_by_id(customer_id)?)
}

/// Returns every stored customer ordered by id.
pub fn list_customers<R>(repo: &R) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    Ok(repo.list_customers()?)
}

/// Merges the supplied non-empty fields into the stored customer.
///
/// Returns `Ok(None)` without touching storage when the customer does not
/// exist. The body is validated only once the customer is known to exist, so
/// unknown ids are reported as absent whatever the payload.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    form: UpdateCustomerForm,
) -> ServiceResult<Option<Customer>>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let Ok(customer_id) = CustomerId::new(customer_id) else {
        return Ok(None);
    };

    let Some(mut customer) = repo.get_customer_by_id(customer_id)? else {
        return Ok(None);
    };

    let updates = CustomerUpdate::try_from(form)?;

    customer.apply(&updates);

    if repo.update_customer(&customer)? == 0 {
        // Removed between the read and the write.
        log::warn!("Customer {customer_id} disappeared before update");
        return Ok(None);
    }

    Ok(Some(customer))
}

/// Deletes the customer and returns its id, or `Ok(None)` when missing.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Option<CustomerId>>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let Ok(customer_id) = CustomerId::new(customer_id) else {
        return Ok(None);
    };

    let Some(customer) = repo.get_customer_by_id(customer_id)? else {
        return Ok(None);
    };

    if repo.delete_customer(customer.id)? == 0 {
        log::warn!("Customer {customer_id} disappeared before delete");
        return Ok(None);
    }

    log::info!("Deleted customer {customer_id}");

    Ok(Some(customer.id))
}
