use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::customer::CustomerIdResponse;
use crate::forms::customer::{CreateCustomerForm, UpdateCustomerForm};
use crate::repository::DieselRepository;
use crate::routes::{not_found, service_error};
use crate::services::customer as customer_service;

#[get("/customers")]
pub async fn list_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    match customer_service::list_customers(repo.get_ref()) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => service_error(err, "list customers"),
    }
}

#[post("/customers")]
pub async fn create_customer(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CreateCustomerForm>,
) -> impl Responder {
    match customer_service::create_customer(repo.get_ref(), form) {
        Ok(customer_id) => HttpResponse::Created().json(CustomerIdResponse { customer_id }),
        Err(err) => service_error(err, "create customer"),
    }
}

#[get("/customers/{customer_id}")]
pub async fn show_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::get_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(Some(customer)) => HttpResponse::Ok().json(customer),
        Ok(None) => not_found(),
        Err(err) => service_error(err, "get customer"),
    }
}

#[put("/customers/{customer_id}")]
pub async fn update_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCustomerForm>,
) -> impl Responder {
    match customer_service::update_customer(repo.get_ref(), customer_id.into_inner(), form) {
        Ok(Some(customer)) => HttpResponse::Ok().json(customer),
        Ok(None) => not_found(),
        Err(err) => service_error(err, "update customer"),
    }
}

#[delete("/customers/{customer_id}")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customer_service::delete_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(Some(customer_id)) => HttpResponse::Ok().json(CustomerIdResponse { customer_id }),
        Ok(None) => not_found(),
        Err(err) => service_error(err, "delete customer"),
    }
}
