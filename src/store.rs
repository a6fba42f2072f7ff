use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Customer, LineItem, Order, Price, Product};

/// Read-only ID-keyed maps of every entity the API serves.
///
/// Built once at startup and shared between workers through
/// `web::Data<Store>`; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: HashMap<u32, Product>,
    customers: HashMap<u32, Customer>,
    orders: HashMap<u32, Order>,
}

impl Store {
    pub fn new(products: Vec<Product>, customers: Vec<Customer>, orders: Vec<Order>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
            customers: customers.into_iter().map(|c| (c.id, c)).collect(),
            orders: orders.into_iter().map(|o| (o.id, o)).collect(),
        }
    }

    /// The fixed dataset served by the API.
    pub fn seeded() -> Self {
        let apple = Product::new(1000, "Apple", Price(250));
        let pear = Product::new(1001, "Pear", Price(325));
        let banana = Product::new(1002, "Banana", Price(175));

        let fred = Customer::new(111, "Fred", "fred@example.com");
        let barny = Customer::new(112, "Barny", "barny@example.com");

        // Orders hold their own copies of the customer and product values.
        let orders = vec![
            Order::new(
                1,
                barny.clone(),
                vec![
                    LineItem::new(0, 2, apple.clone()),
                    LineItem::new(1, 1, banana.clone()),
                ],
                utc(2010, 5, 3, 10, 30),
            ),
            Order::new(
                2,
                fred.clone(),
                vec![LineItem::new(0, 3, pear.clone())],
                utc(2010, 6, 1, 14, 5),
            ),
        ];

        Self::new(vec![apple, pear, banana], vec![fred, barny], orders)
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn customer(&self, id: u32) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn order(&self, id: u32) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Resolve the order first, then the line item by its id within that order.
    pub fn line_item(&self, order_id: u32, line_item_id: u32) -> Option<&LineItem> {
        self.order(order_id)?.line_item(line_item_id)
    }
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid UTC instants")
}
