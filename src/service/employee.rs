use crate::{
    abstract_trait::{
        DynEmployeeCommandRepository, DynEmployeeQueryRepository, DynRestaurantQueryRepository,
        EmployeeServiceTrait,
    },
    domain::{
        requests::{CreateEmployeeRequest, UpdateEmployeeRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::ServiceError,
    model::Employee,
};
use async_trait::async_trait;
use tracing::error;

pub struct EmployeeService {
    restaurant_query: DynRestaurantQueryRepository,
    query: DynEmployeeQueryRepository,
    command: DynEmployeeCommandRepository,
}

impl EmployeeService {
    pub fn new(
        restaurant_query: DynRestaurantQueryRepository,
        query: DynEmployeeQueryRepository,
        command: DynEmployeeCommandRepository,
    ) -> Self {
        Self {
            restaurant_query,
            query,
            command,
        }
    }

    async fn restaurant_exists(
        &self,
        id_rest: Option<i32>,
        context: &str,
    ) -> Result<bool, ServiceError> {
        match id_rest {
            Some(id) => self
                .restaurant_query
                .exists(id)
                .await
                .map_err(|e| ServiceError::database(context, e)),
            None => Ok(false),
        }
    }
}

#[async_trait]
impl EmployeeServiceTrait for EmployeeService {
    async fn create(
        &self,
        req: &CreateEmployeeRequest,
    ) -> Result<ApiResponse<Employee>, ServiceError> {
        if !self
            .restaurant_exists(req.id_rest, "Error al crear el empleado")
            .await?
        {
            error!("❌ Restaurant {:?} not found for new employee", req.id_rest);
            return Err(ServiceError::ReferenceNotFound(
                "Restaurante no encontrado".to_string(),
            ));
        }

        let employee = self
            .command
            .create(req)
            .await
            .map_err(|e| ServiceError::database("Error al crear el empleado", e))?;

        Ok(ApiResponse {
            message: "Empleado creado correctamente".to_string(),
            data: employee,
        })
    }

    async fn find_all(&self) -> Result<ListResponse<Employee>, ServiceError> {
        let employees = self
            .query
            .find_all()
            .await
            .map_err(|e| ServiceError::database("Error al obtener empleados", e))?;

        Ok(ListResponse::new(employees))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateEmployeeRequest,
    ) -> Result<ApiResponse<Employee>, ServiceError> {
        let exists = self
            .query
            .exists(id)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar empleado", e))?;

        if !exists {
            return Err(ServiceError::NotFound("Empleado no encontrado".to_string()));
        }

        if !self
            .restaurant_exists(req.id_rest, "Error al actualizar empleado")
            .await?
        {
            error!(
                "❌ Restaurant {:?} not found for employee ID {id} update",
                req.id_rest
            );
            return Err(ServiceError::ReferenceNotFound(
                "Restaurante no encontrado".to_string(),
            ));
        }

        let updated = self
            .command
            .update(id, req)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar empleado", e))?
            .ok_or_else(|| ServiceError::NotFound("Empleado no encontrado".to_string()))?;

        Ok(ApiResponse {
            message: "Empleado actualizado correctamente".to_string(),
            data: updated,
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<Employee>, ServiceError> {
        let deleted = self
            .command
            .delete(id)
            .await
            .map_err(|e| ServiceError::database("Error al eliminar empleado", e))?;

        let Some(employee) = deleted else {
            error!("❌ Employee ID {id} not found for deletion");
            return Err(ServiceError::NotFound("Empleado no encontrado".to_string()));
        };

        Ok(ApiResponse {
            message: "Empleado eliminado correctamente".to_string(),
            data: employee,
        })
    }
}
