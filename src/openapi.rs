use utoipa::OpenApi;

use crate::handlers;
use crate::models::{Customer, LineItem, Order, Price, Product};

/// OpenAPI description of the lookup API. Not served; render it with
/// `ApiDoc::openapi().to_pretty_json()`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::get_order,
        handlers::orders::get_line_item,
        handlers::products::get_product,
        handlers::customers::get_customer,
    ),
    components(schemas(Customer, Product, LineItem, Order, Price)),
    tags(
        (name = "orders", description = "Orders and their line items"),
        (name = "products", description = "Product catalogue"),
        (name = "customers", description = "Customers"),
    )
)]
pub struct ApiDoc;
