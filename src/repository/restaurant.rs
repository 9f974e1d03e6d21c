use crate::{
    abstract_trait::{RestaurantCommandRepositoryTrait, RestaurantQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateRestaurantRequest, UpdateRestaurantRequest},
    errors::RepositoryError,
    model::Restaurant,
    repository::meta,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct RestaurantQueryRepository {
    db: ConnectionPool,
}

impl RestaurantQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantQueryRepositoryTrait for RestaurantQueryRepository {
    async fn find_all(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, Restaurant>(
            r#"
            SELECT id_rest, nombre, ciudad, direccion, fecha_apertura
            FROM restaurante
            ORDER BY nombre
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to list restaurants: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        meta::exists(&self.db, meta::RESTAURANTE, id).await
    }
}

pub struct RestaurantCommandRepository {
    db: ConnectionPool,
}

impl RestaurantCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantCommandRepositoryTrait for RestaurantCommandRepository {
    async fn create(&self, req: &CreateRestaurantRequest) -> Result<Restaurant, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Restaurant>(
            r#"
            INSERT INTO restaurante (id_rest, nombre, ciudad, direccion, fecha_apertura)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_rest, nombre, ciudad, direccion, fecha_apertura
            "#,
        )
        .bind(req.id_rest)
        .bind(&req.nombre)
        .bind(&req.ciudad)
        .bind(&req.direccion)
        .bind(req.fecha_apertura)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create restaurant {:?}: {err:?}", req.nombre);
            RepositoryError::from(err)
        })?;

        info!("✅ Created restaurant ID {} ({})", result.id_rest, result.nombre);
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateRestaurantRequest,
    ) -> Result<Option<Restaurant>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Restaurant>(
            r#"
            UPDATE restaurante
            SET nombre = $2,
                ciudad = $3,
                direccion = $4,
                fecha_apertura = $5
            WHERE id_rest = $1
            RETURNING id_rest, nombre, ciudad, direccion, fecha_apertura
            "#,
        )
        .bind(id)
        .bind(&req.nombre)
        .bind(&req.ciudad)
        .bind(&req.direccion)
        .bind(req.fecha_apertura)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update restaurant ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🔄 Updated restaurant ID {id}");
        }
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<Option<Restaurant>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Restaurant>(
            r#"
            DELETE FROM restaurante
            WHERE id_rest = $1
            RETURNING id_rest, nombre, ciudad, direccion, fecha_apertura
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete restaurant ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🗑️ Deleted restaurant ID {id}");
        }
        Ok(result)
    }
}
