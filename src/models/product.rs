use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Price;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Unit price in cents.
    pub price: Price,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}
