use crate::{
    domain::{
        requests::{CreateEmployeeRequest, UpdateEmployeeRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Employee,
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait EmployeeQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait EmployeeCommandRepositoryTrait {
    async fn create(&self, req: &CreateEmployeeRequest) -> Result<Employee, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateEmployeeRequest,
    ) -> Result<Option<Employee>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<Option<Employee>, RepositoryError>;
}

pub type DynEmployeeQueryRepository = Arc<dyn EmployeeQueryRepositoryTrait + Send + Sync>;
pub type DynEmployeeCommandRepository = Arc<dyn EmployeeCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait EmployeeServiceTrait {
    async fn create(
        &self,
        req: &CreateEmployeeRequest,
    ) -> Result<ApiResponse<Employee>, ServiceError>;
    async fn find_all(&self) -> Result<ListResponse<Employee>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateEmployeeRequest,
    ) -> Result<ApiResponse<Employee>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<Employee>, ServiceError>;
}

pub type DynEmployeeService = Arc<dyn EmployeeServiceTrait + Send + Sync>;
