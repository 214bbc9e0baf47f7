//! Application services orchestrating repository calls.

pub mod customer;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
