use crate::{
    abstract_trait::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    model::{Order, OrderDetailProduct},
    repository::meta,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, Order>(
            r#"
            SELECT id_pedido, fecha, total, id_rest
            FROM pedido
            ORDER BY fecha DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to list orders: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, Order>(
            r#"
            SELECT id_pedido, fecha, total, id_rest
            FROM pedido
            WHERE id_pedido = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(row)
    }

    async fn find_details(&self, id: i32) -> Result<Vec<OrderDetailProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, OrderDetailProduct>(
            r#"
            SELECT dp.id_detalle, dp.cantidad, dp.subtotal, dp.id_pedido, dp.id_prod,
                   p.nombre AS producto_nombre
            FROM detalle_pedido dp
            JOIN producto p ON dp.id_prod = p.id_prod
            WHERE dp.id_pedido = $1
            "#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch details for order ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        meta::exists(&self.db, meta::PEDIDO, id).await
    }
}

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO pedido (id_pedido, fecha, total, id_rest)
            VALUES ($1, $2, $3, $4)
            RETURNING id_pedido, fecha, total, id_rest
            "#,
        )
        .bind(req.id_pedido)
        .bind(req.fecha)
        .bind(req.total)
        .bind(req.id_rest)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order {:?}: {err:?}", req.id_pedido);
            RepositoryError::from(err)
        })?;

        info!("✅ Created order ID {}", result.id_pedido);
        Ok(result)
    }

    async fn update_with_details(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let updated = sqlx::query_as::<_, Order>(
            r#"
            UPDATE pedido
            SET fecha = $2,
                total = $3
            WHERE id_pedido = $1
            RETURNING id_pedido, fecha, total, id_rest
            "#,
        )
        .bind(id)
        .bind(req.fecha)
        .bind(req.total)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        let Some(order) = updated else {
            // Nothing touched yet; the transaction rolls back on drop.
            return Ok(None);
        };

        sqlx::query("DELETE FROM detalle_pedido WHERE id_pedido = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to clear details for order ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        for line in &req.detalles {
            sqlx::query(
                r#"
                INSERT INTO detalle_pedido (cantidad, subtotal, id_pedido, id_prod)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(line.cantidad)
            .bind(line.subtotal)
            .bind(id)
            .bind(line.id_prod)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to reinsert detail for order ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🔄 Updated order ID {id} and replaced {} line items",
            req.detalles.len()
        );
        Ok(Some(order))
    }

    async fn delete_cascade(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        sqlx::query("DELETE FROM detalle_pedido WHERE id_pedido = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete details for order ID {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        let deleted = sqlx::query_as::<_, Order>(
            r#"
            DELETE FROM pedido
            WHERE id_pedido = $1
            RETURNING id_pedido, fecha, total, id_rest
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete order ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        if deleted.is_some() {
            info!("🗑️ Deleted order ID {id} and its line items");
        }
        Ok(deleted)
    }
}
