mod employee;
mod health;
mod order;
mod order_item;
mod product;
mod report;
mod restaurant;

pub use self::employee::EmployeeService;
pub use self::health::HealthService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::order_item::{OrderDetailService, OrderDetailServiceDeps};
pub use self::product::ProductService;
pub use self::report::ReportService;
pub use self::restaurant::RestaurantService;
