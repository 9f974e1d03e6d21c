mod employee;
mod health;
mod meta;
mod order;
mod order_item;
mod product;
mod report;
mod restaurant;

pub use self::employee::{EmployeeCommandRepository, EmployeeQueryRepository};
pub use self::health::HealthRepository;
pub use self::meta::{DETALLE_PEDIDO, EMPLEADO, PEDIDO, PRODUCTO, RESTAURANTE, TableMeta, exists};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::order_item::{OrderDetailCommandRepository, OrderDetailQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::report::ReportRepository;
pub use self::restaurant::{RestaurantCommandRepository, RestaurantQueryRepository};
