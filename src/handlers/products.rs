use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::parse_id;
use crate::models::Product;
use crate::store::Store;

/// GET /api/product/{id}
#[utoipa::path(
    get,
    path = "/api/product/{id}",
    params(
        ("id" = u32, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Malformed or unknown product id"),
    ),
    tag = "products"
)]
pub async fn get_product(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = store
        .product(parse_id(&path.into_inner())?)
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(product))
}
