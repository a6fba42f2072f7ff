use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::parse_id;
use crate::models::{LineItem, Order};
use crate::store::Store;

/// GET /api/order/{id}
///
/// Returns the order with its customer and line items embedded.
#[utoipa::path(
    get,
    path = "/api/order/{id}",
    params(
        ("id" = u32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 404, description = "Malformed or unknown order id"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = parse_id(&path.into_inner())?;
    let order = store.order(order_id).ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(order))
}

/// GET /api/order/{oid}/lineitem/{lid}
///
/// `lid` is matched against the line item's own id within the order, not
/// its position.
#[utoipa::path(
    get,
    path = "/api/order/{oid}/lineitem/{lid}",
    params(
        ("oid" = u32, Path, description = "Order id"),
        ("lid" = u32, Path, description = "Line item id within the order"),
    ),
    responses(
        (status = 200, description = "Line item found", body = LineItem),
        (status = 404, description = "Malformed or unknown order or line item id"),
    ),
    tag = "orders"
)]
pub async fn get_line_item(
    store: web::Data<Store>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (oid, lid) = path.into_inner();

    let order = store.order(parse_id(&oid)?).ok_or(AppError::NotFound)?;
    let line_item = order
        .line_item(parse_id(&lid)?)
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(line_item))
}
