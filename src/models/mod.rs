pub mod customer;
pub mod line_item;
pub mod order;
pub mod price;
pub mod product;

pub use customer::Customer;
pub use line_item::LineItem;
pub use order::Order;
pub use price::Price;
pub use product::Product;
