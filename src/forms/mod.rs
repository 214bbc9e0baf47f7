//! Incoming payload definitions backing the customer routes.

pub mod customer;
