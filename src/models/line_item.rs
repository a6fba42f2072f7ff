use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Price, Product};

/// One line of an order.
///
/// `product` is a copy of the product as it was when the order was placed,
/// and `id` is only unique within the owning order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    pub id: u32,
    pub quantity: u32,
    pub product: Product,
    /// Always `quantity * product.price`.
    pub subtotal: Price,
}

impl LineItem {
    pub fn new(id: u32, quantity: u32, product: Product) -> Self {
        let subtotal = product.price * quantity;
        Self {
            id,
            quantity,
            product,
            subtotal,
        }
    }
}
