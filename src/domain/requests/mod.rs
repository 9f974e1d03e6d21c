mod employee;
mod order;
mod order_item;
mod product;
mod report;
mod restaurant;

pub use self::employee::{CreateEmployeeRequest, UpdateEmployeeRequest};
pub use self::order::{CreateOrderRequest, OrderLineInput, UpdateOrderRequest};
pub use self::order_item::{CreateOrderDetailRequest, UpdateOrderDetailRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::report::TopSellingParams;
pub use self::restaurant::{CreateRestaurantRequest, UpdateRestaurantRequest};
