//! DTOs serialized into HTTP response bodies.

pub mod customer;
