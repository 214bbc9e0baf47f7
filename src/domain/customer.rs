use serde::Serialize;

use crate::domain::types::{CustomerEmail, CustomerId, CustomerName, TypeConstraintError};

/// A persisted customer record.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: CustomerName,
    pub email: CustomerEmail,
    pub phone: String,
    pub address: String,
}

impl Customer {
    /// Merges the provided updates into the record in place.
    ///
    /// Fields left as `None` in `updates` keep their current value.
    pub fn apply(&mut self, updates: &CustomerUpdate) {
        if let Some(name) = &updates.name {
            self.name = name.clone();
        }
        if let Some(email) = &updates.email {
            self.email = email.clone();
        }
        if let Some(phone) = &updates.phone {
            self.phone = phone.clone();
        }
        if let Some(address) = &updates.address {
            self.address = address.clone();
        }
    }
}

/// A customer that has not been persisted yet and therefore has no id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub email: CustomerEmail,
    pub phone: String,
    pub address: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(name: CustomerName, email: CustomerEmail, phone: String, address: String) -> Self {
        Self {
            name,
            email,
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
        }
    }

    /// Validates raw inputs and builds a new customer.
    pub fn try_new(
        name: String,
        email: String,
        phone: String,
        address: String,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            CustomerName::new(name)?,
            CustomerEmail::new(email)?,
            phone,
            address,
        ))
    }

    /// Attaches the identifier assigned by storage.
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// Partial update of a customer. `None` means "leave unchanged".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerUpdate {
    pub name: Option<CustomerName>,
    pub email: Option<CustomerEmail>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Trims the value and drops it when nothing is left.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl CustomerUpdate {
    /// Builds an update from raw optional inputs.
    ///
    /// Absent, empty and whitespace-only values all mean "no change". Values
    /// that are present must still satisfy the field constraints.
    pub fn try_new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: non_blank(name).map(CustomerName::new).transpose()?,
            email: non_blank(email).map(CustomerEmail::new).transpose()?,
            phone: non_blank(phone),
            address: non_blank(address),
        })
    }
}
