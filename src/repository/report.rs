use crate::{
    abstract_trait::ReportRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderProductRow, RestaurantSalesRow, RoleCountRow, TopProductRow},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::error;

pub struct ReportRepository {
    db: ConnectionPool,
}

impl ReportRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportRepositoryTrait for ReportRepository {
    async fn products_per_order(
        &self,
        id_pedido: i32,
    ) -> Result<Vec<OrderProductRow>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, OrderProductRow>(
            r#"
            SELECT p.nombre AS producto, dp.cantidad, dp.subtotal
            FROM detalle_pedido dp
            JOIN producto p ON dp.id_prod = p.id_prod
            WHERE dp.id_pedido = $1
            "#,
        )
        .bind(id_pedido)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to list products for order ID {id_pedido}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn top_selling(&self, min_units: i64) -> Result<Vec<TopProductRow>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, TopProductRow>(
            r#"
            SELECT p.nombre AS producto, SUM(dp.cantidad) AS unidades_vendidas
            FROM detalle_pedido dp
            JOIN producto p ON dp.id_prod = p.id_prod
            GROUP BY p.id_prod, p.nombre
            HAVING SUM(dp.cantidad) > $1
            "#,
        )
        .bind(min_units)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to compute top-selling products: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn sales_per_restaurant(&self) -> Result<Vec<RestaurantSalesRow>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, RestaurantSalesRow>(
            r#"
            SELECT r.nombre AS restaurante, SUM(p.total) AS total_ventas
            FROM pedido p
            JOIN restaurante r ON p.id_rest = r.id_rest
            GROUP BY r.id_rest, r.nombre
            ORDER BY total_ventas DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to compute sales per restaurant: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn orders_by_date(&self, fecha: NaiveDate) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, Order>(
            r#"
            SELECT id_pedido, fecha, total, id_rest
            FROM pedido
            WHERE fecha = $1
            "#,
        )
        .bind(fecha)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to list orders for date {fecha}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn employees_by_role(
        &self,
        id_rest: i32,
    ) -> Result<Vec<RoleCountRow>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, RoleCountRow>(
            r#"
            SELECT rol, COUNT(*) AS cantidad_empleados
            FROM empleado
            WHERE id_rest = $1
            GROUP BY rol
            "#,
        )
        .bind(id_rest)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to count employees by role for restaurant ID {id_rest}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }
}
