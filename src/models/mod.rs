//! Database models backing the customer repository.

pub mod customer;
#[cfg(feature = "server")]
pub mod config;
