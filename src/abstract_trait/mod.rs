mod employee;
mod health;
mod order;
mod order_item;
mod product;
mod report;
mod restaurant;

pub use self::employee::{
    DynEmployeeCommandRepository, DynEmployeeQueryRepository, DynEmployeeService,
    EmployeeCommandRepositoryTrait, EmployeeQueryRepositoryTrait, EmployeeServiceTrait,
};
pub use self::health::{DynHealthRepository, DynHealthService, HealthRepositoryTrait, HealthServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynOrderService,
    OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::order_item::{
    DynOrderDetailCommandRepository, DynOrderDetailQueryRepository, DynOrderDetailService,
    OrderDetailCommandRepositoryTrait, OrderDetailQueryRepositoryTrait, OrderDetailServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ProductServiceTrait,
};
pub use self::report::{DynReportRepository, DynReportService, ReportRepositoryTrait, ReportServiceTrait};
pub use self::restaurant::{
    DynRestaurantCommandRepository, DynRestaurantQueryRepository, DynRestaurantService,
    RestaurantCommandRepositoryTrait, RestaurantQueryRepositoryTrait, RestaurantServiceTrait,
};
