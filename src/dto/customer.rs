use serde::Serialize;

use crate::domain::types::CustomerId;

/// Body returned after a customer was created or deleted.
#[derive(Debug, Serialize)]
pub struct CustomerIdResponse {
    pub customer_id: CustomerId,
}

/// Body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
