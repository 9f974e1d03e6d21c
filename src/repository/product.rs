use crate::{
    abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
    repository::meta,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id_prod, nombre, precio
            FROM producto
            ORDER BY nombre
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to list products: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        meta::exists(&self.db, meta::PRODUCTO, id).await
    }
}

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO producto (id_prod, nombre, precio)
            VALUES ($1, $2, $3)
            RETURNING id_prod, nombre, precio
            "#,
        )
        .bind(req.id_prod)
        .bind(&req.nombre)
        .bind(req.precio)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {:?}: {err:?}", req.nombre);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", result.id_prod, result.nombre);
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            UPDATE producto
            SET nombre = $2,
                precio = $3
            WHERE id_prod = $1
            RETURNING id_prod, nombre, precio
            "#,
        )
        .bind(id)
        .bind(&req.nombre)
        .bind(req.precio)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🔄 Updated product ID {id}");
        }
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(
            r#"
            DELETE FROM producto
            WHERE id_prod = $1
            RETURNING id_prod, nombre, precio
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🗑️ Deleted product ID {id}");
        }
        Ok(result)
    }
}
