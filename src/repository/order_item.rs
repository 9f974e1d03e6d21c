use crate::{
    abstract_trait::{OrderDetailCommandRepositoryTrait, OrderDetailQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateOrderDetailRequest, UpdateOrderDetailRequest},
    errors::RepositoryError,
    model::{OrderDetail, OrderLineSummary},
    repository::meta,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderDetailQueryRepository {
    db: ConnectionPool,
}

impl OrderDetailQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderDetailQueryRepositoryTrait for OrderDetailQueryRepository {
    async fn find_by_order(
        &self,
        id_pedido: i32,
    ) -> Result<Vec<OrderLineSummary>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, OrderLineSummary>(
            r#"
            SELECT p.nombre, dp.cantidad, dp.subtotal
            FROM detalle_pedido dp
            JOIN producto p ON dp.id_prod = p.id_prod
            WHERE dp.id_pedido = $1
            "#,
        )
        .bind(id_pedido)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to list details for order ID {id_pedido}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn exists(&self, id_detalle: i32) -> Result<bool, RepositoryError> {
        meta::exists(&self.db, meta::DETALLE_PEDIDO, id_detalle).await
    }
}

pub struct OrderDetailCommandRepository {
    db: ConnectionPool,
}

impl OrderDetailCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderDetailCommandRepositoryTrait for OrderDetailCommandRepository {
    async fn create(
        &self,
        req: &CreateOrderDetailRequest,
    ) -> Result<OrderDetail, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Explicit key when the client supplies one, generated otherwise.
        let query = if req.id_detalle.is_some() {
            sqlx::query_as::<_, OrderDetail>(
                r#"
                INSERT INTO detalle_pedido (id_detalle, cantidad, subtotal, id_pedido, id_prod)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id_detalle, cantidad, subtotal, id_pedido, id_prod
                "#,
            )
            .bind(req.id_detalle)
            .bind(req.cantidad)
            .bind(req.subtotal)
            .bind(req.id_pedido)
            .bind(req.id_prod)
        } else {
            sqlx::query_as::<_, OrderDetail>(
                r#"
                INSERT INTO detalle_pedido (cantidad, subtotal, id_pedido, id_prod)
                VALUES ($1, $2, $3, $4)
                RETURNING id_detalle, cantidad, subtotal, id_pedido, id_prod
                "#,
            )
            .bind(req.cantidad)
            .bind(req.subtotal)
            .bind(req.id_pedido)
            .bind(req.id_prod)
        };

        let result = query.fetch_one(&mut *conn).await.map_err(|err| {
            error!("❌ Failed to create order detail: {err:?}");
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order detail ID {} for order {}",
            result.id_detalle, result.id_pedido
        );
        Ok(result)
    }

    async fn update(
        &self,
        id_detalle: i32,
        req: &UpdateOrderDetailRequest,
    ) -> Result<Option<OrderDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderDetail>(
            r#"
            UPDATE detalle_pedido
            SET cantidad = $2,
                subtotal = $3
            WHERE id_detalle = $1
            RETURNING id_detalle, cantidad, subtotal, id_pedido, id_prod
            "#,
        )
        .bind(id_detalle)
        .bind(req.cantidad)
        .bind(req.subtotal)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order detail ID {id_detalle}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🔄 Updated order detail ID {id_detalle}");
        }
        Ok(result)
    }

    async fn delete(&self, id_detalle: i32) -> Result<Option<OrderDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderDetail>(
            r#"
            DELETE FROM detalle_pedido
            WHERE id_detalle = $1
            RETURNING id_detalle, cantidad, subtotal, id_pedido, id_prod
            "#,
        )
        .bind(id_detalle)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete order detail ID {id_detalle}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🗑️ Deleted order detail ID {id_detalle}");
        }
        Ok(result)
    }
}
