use crate::{
    abstract_trait::{
        DynRestaurantCommandRepository, DynRestaurantQueryRepository, RestaurantServiceTrait,
    },
    domain::{
        requests::{CreateRestaurantRequest, UpdateRestaurantRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::ServiceError,
    model::Restaurant,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct RestaurantService {
    query: DynRestaurantQueryRepository,
    command: DynRestaurantCommandRepository,
}

impl RestaurantService {
    pub fn new(query: DynRestaurantQueryRepository, command: DynRestaurantCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl RestaurantServiceTrait for RestaurantService {
    async fn create(
        &self,
        req: &CreateRestaurantRequest,
    ) -> Result<ApiResponse<Restaurant>, ServiceError> {
        if req.nombre.is_none() || req.ciudad.is_none() || req.direccion.is_none() {
            return Err(ServiceError::MissingFields(
                "Nombre, ciudad y dirección son requeridos".to_string(),
            ));
        }

        let restaurant = self
            .command
            .create(req)
            .await
            .map_err(|e| ServiceError::database("Error al crear restaurante", e))?;

        Ok(ApiResponse {
            message: "Restaurante creado correctamente".to_string(),
            data: restaurant,
        })
    }

    async fn find_all(&self) -> Result<ListResponse<Restaurant>, ServiceError> {
        let restaurants = self
            .query
            .find_all()
            .await
            .map_err(|e| ServiceError::database("Error al obtener restaurantes", e))?;

        Ok(ListResponse::new(restaurants))
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateRestaurantRequest,
    ) -> Result<ApiResponse<Restaurant>, ServiceError> {
        let exists = self
            .query
            .exists(id)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar", e))?;

        if !exists {
            return Err(ServiceError::NotFound("Restaurante no encontrado".to_string()));
        }

        let updated = self
            .command
            .update(id, req)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar", e))?
            .ok_or_else(|| ServiceError::NotFound("Restaurante no encontrado".to_string()))?;

        info!("✅ Restaurant ID {id} updated");

        Ok(ApiResponse {
            message: "Restaurante actualizado".to_string(),
            data: updated,
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<Restaurant>, ServiceError> {
        let deleted = self
            .command
            .delete(id)
            .await
            .map_err(|e| ServiceError::database("Error al eliminar", e))?;

        let Some(restaurant) = deleted else {
            error!("❌ Restaurant ID {id} not found for deletion");
            return Err(ServiceError::NotFound("Restaurante no encontrado".to_string()));
        };

        Ok(ApiResponse {
            message: "Restaurante eliminado".to_string(),
            data: restaurant,
        })
    }
}
