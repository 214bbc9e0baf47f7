use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};
use crate::domain::types::{CustomerEmail, CustomerId, CustomerName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Full set of mutable columns written when updating a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(customer.id)?,
            name: CustomerName::new(customer.name)?,
            email: CustomerEmail::new(customer.email)?,
            phone: customer.phone,
            address: customer.address,
        })
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            email: customer.email.as_str(),
            phone: customer.phone.as_str(),
            address: customer.address.as_str(),
        }
    }
}

impl<'a> From<&'a DomainCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            email: customer.email.as_str(),
            phone: customer.phone.as_str(),
            address: customer.address.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_domain_new() -> DomainNewCustomer {
        DomainNewCustomer::try_new(
            "John".to_string(),
            "john@example.com".to_string(),
            "123".to_string(),
            "addr".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn from_domain_new_creates_newcustomer() {
        let domain = sample_domain_new();
        let new: NewCustomer = (&domain).into();
        assert_eq!(new.name, domain.name.as_str());
        assert_eq!(new.email, domain.email.as_str());
        assert_eq!(new.phone, domain.phone);
        assert_eq!(new.address, domain.address);
    }

    #[test]
    fn from_domain_customer_creates_full_changeset() {
        let domain = sample_domain_new().into_customer(CustomerId::new(3).unwrap());
        let update: UpdateCustomer = (&domain).into();
        assert_eq!(update.name, "John");
        assert_eq!(update.email, "john@example.com");
        assert_eq!(update.phone, "123");
        assert_eq!(update.address, "addr");
    }

    #[test]
    fn customer_into_domain() {
        let db_customer = Customer {
            id: 1,
            name: "n".to_string(),
            email: "e@example.com".to_string(),
            phone: "p".to_string(),
            address: "a".to_string(),
        };
        let domain = DomainCustomer::try_from(db_customer).unwrap();
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.name.as_str(), "n");
        assert_eq!(domain.email.as_str(), "e@example.com");
        assert_eq!(domain.phone, "p");
        assert_eq!(domain.address, "a");
    }

    #[test]
    fn corrupted_row_fails_conversion() {
        let db_customer = Customer {
            id: 0,
            name: "n".to_string(),
            email: "e@example.com".to_string(),
            phone: String::new(),
            address: String::new(),
        };
        assert_eq!(
            DomainCustomer::try_from(db_customer),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
