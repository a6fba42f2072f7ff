use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::parse_id;
use crate::models::Customer;
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/customer/{id}",
    params(
        ("id" = u32, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "Malformed or unknown customer id"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let customer = store
        .customer(parse_id(&path.into_inner())?)
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(customer))
}
