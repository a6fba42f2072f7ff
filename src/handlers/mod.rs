pub mod customers;
pub mod orders;
pub mod products;
pub mod site;

use actix_web::web;

use crate::errors::AppError;

/// Register the four lookup routes. Each pattern only accepts digit segments;
/// anything else falls through to the default 404. Routes answer every method.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/order/{id:[0-9]+}", web::route().to(orders::get_order))
            .route(
                "/order/{oid:[0-9]+}/lineitem/{lid:[0-9]+}",
                web::route().to(orders::get_line_item),
            )
            .route("/product/{id:[0-9]+}", web::route().to(products::get_product))
            .route("/customer/{id:[0-9]+}", web::route().to(customers::get_customer)),
    );
}

/// Parse a path segment as an entity id. Digit strings that overflow are
/// treated like any other unknown id.
pub(crate) fn parse_id(raw: &str) -> Result<u32, AppError> {
    Ok(raw.parse()?)
}
