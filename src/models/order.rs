use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Customer, LineItem, Price};

/// A placed order with snapshot copies of its customer and products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: u32,
    pub customer: Customer,
    #[serde(rename = "lineitems")]
    pub line_items: Vec<LineItem>,
    /// Sum of the line item subtotals.
    pub total: Price,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: u32,
        customer: Customer,
        line_items: Vec<LineItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let total = line_items.iter().map(|l| l.subtotal).sum();
        Self {
            id,
            customer,
            line_items,
            total,
            created_at,
        }
    }

    /// Find a line item by its own id, not its position.
    pub fn line_item(&self, id: u32) -> Option<&LineItem> {
        self.line_items.iter().find(|l| l.id == id)
    }
}
