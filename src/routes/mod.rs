//! HTTP handlers and their registration.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::customer::ErrorResponse;
use crate::services::ServiceError;

pub mod customer;

pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";

/// Registers the customer endpoints together with their extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(customer::list_customers)
        .service(customer::create_customer)
        .service(customer::show_customer)
        .service(customer::update_customer)
        .service(customer::delete_customer);
}

/// Rejects unreadable JSON bodies with `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {err}");
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Treats ids that are not integers as unknown resources.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, not_found()).into()
    })
}

pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(CUSTOMER_NOT_FOUND))
}

/// Maps a service failure to a response, logging anything unexpected.
pub fn service_error(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message))
        }
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}
