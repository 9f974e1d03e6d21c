use crate::{
    abstract_trait::{
        DynEmployeeService, DynHealthService, DynOrderDetailService, DynOrderService,
        DynProductService, DynReportService, DynRestaurantService,
    },
    config::ConnectionPool,
    repository::{
        EmployeeCommandRepository, EmployeeQueryRepository, HealthRepository,
        OrderCommandRepository, OrderDetailCommandRepository, OrderDetailQueryRepository,
        OrderQueryRepository, ProductCommandRepository, ProductQueryRepository, ReportRepository,
        RestaurantCommandRepository, RestaurantQueryRepository,
    },
    service::{
        EmployeeService, HealthService, OrderDetailService, OrderDetailServiceDeps, OrderService,
        OrderServiceDeps, ProductService, ReportService, RestaurantService,
    },
};
use crate::abstract_trait::{
    DynEmployeeQueryRepository, DynOrderQueryRepository, DynProductQueryRepository,
    DynRestaurantQueryRepository,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub restaurant_service: DynRestaurantService,
    pub product_service: DynProductService,
    pub order_service: DynOrderService,
    pub order_detail_service: DynOrderDetailService,
    pub employee_service: DynEmployeeService,
    pub report_service: DynReportService,
    pub health_service: DynHealthService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("restaurant_service", &"DynRestaurantService")
            .field("product_service", &"DynProductService")
            .field("order_service", &"DynOrderService")
            .field("order_detail_service", &"DynOrderDetailService")
            .field("employee_service", &"DynEmployeeService")
            .field("report_service", &"DynReportService")
            .field("health_service", &"DynHealthService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let restaurant_query =
            Arc::new(RestaurantQueryRepository::new(pool.clone())) as DynRestaurantQueryRepository;
        let restaurant_command = Arc::new(RestaurantCommandRepository::new(pool.clone()));

        let product_query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;
        let product_command = Arc::new(ProductCommandRepository::new(pool.clone()));

        let order_query =
            Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;
        let order_command = Arc::new(OrderCommandRepository::new(pool.clone()));

        let detail_query = Arc::new(OrderDetailQueryRepository::new(pool.clone()));
        let detail_command = Arc::new(OrderDetailCommandRepository::new(pool.clone()));

        let employee_query =
            Arc::new(EmployeeQueryRepository::new(pool.clone())) as DynEmployeeQueryRepository;
        let employee_command = Arc::new(EmployeeCommandRepository::new(pool.clone()));

        let restaurant_service = Arc::new(RestaurantService::new(
            restaurant_query.clone(),
            restaurant_command,
        )) as DynRestaurantService;

        let product_service = Arc::new(ProductService::new(
            product_query.clone(),
            product_command,
        )) as DynProductService;

        let order_service = Arc::new(OrderService::new(OrderServiceDeps {
            restaurant_query: restaurant_query.clone(),
            query: order_query.clone(),
            command: order_command,
        })) as DynOrderService;

        let order_detail_service = Arc::new(OrderDetailService::new(OrderDetailServiceDeps {
            order_query,
            product_query,
            query: detail_query,
            command: detail_command,
        })) as DynOrderDetailService;

        let employee_service = Arc::new(EmployeeService::new(
            restaurant_query,
            employee_query,
            employee_command,
        )) as DynEmployeeService;

        let report_service =
            Arc::new(ReportService::new(Arc::new(ReportRepository::new(pool.clone()))))
                as DynReportService;

        let health_service =
            Arc::new(HealthService::new(Arc::new(HealthRepository::new(pool)))) as DynHealthService;

        Self {
            restaurant_service,
            product_service,
            order_service,
            order_detail_service,
            employee_service,
            report_service,
            health_service,
        }
    }
}
