mod employee;
mod order;
mod order_item;
mod product;
mod report;
mod restaurant;

pub use self::employee::Employee;
pub use self::order::Order;
pub use self::order_item::{OrderDetail, OrderDetailProduct, OrderLineSummary};
pub use self::product::Product;
pub use self::report::{OrderProductRow, RestaurantSalesRow, RoleCountRow, TopProductRow};
pub use self::restaurant::Restaurant;
