use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::ServiceError,
    model::Product,
};
use async_trait::async_trait;
use tracing::error;

pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        if req.nombre.is_none() || req.precio.is_none() {
            return Err(ServiceError::MissingFields(
                "Nombre y precio son requeridos".to_string(),
            ));
        }

        let product = self
            .command
            .create(req)
            .await
            .map_err(|e| ServiceError::database("Error al crear producto", e))?;

        Ok(ApiResponse {
            message: "Producto creado correctamente".to_string(),
            data: product,
        })
    }

    async fn find_all(&self) -> Result<ListResponse<Product>, ServiceError> {
        let products = self
            .query
            .find_all()
            .await
            .map_err(|e| ServiceError::database("Error al obtener productos", e))?;

        Ok(ListResponse::new(products))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError> {
        let exists = self
            .query
            .exists(id)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar producto", e))?;

        if !exists {
            return Err(ServiceError::NotFound("Producto no encontrado".to_string()));
        }

        let updated = self
            .command
            .update(id, req)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar producto", e))?
            .ok_or_else(|| ServiceError::NotFound("Producto no encontrado".to_string()))?;

        Ok(ApiResponse {
            message: "Producto actualizado".to_string(),
            data: updated,
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<Product>, ServiceError> {
        let deleted = self
            .command
            .delete(id)
            .await
            .map_err(|e| ServiceError::database("Error al eliminar producto", e))?;

        let Some(product) = deleted else {
            error!("❌ Product ID {id} not found for deletion");
            return Err(ServiceError::NotFound("Producto no encontrado".to_string()));
        };

        Ok(ApiResponse {
            message: "Producto eliminado".to_string(),
            data: product,
        })
    }
}
