use crate::{config::ConnectionPool, errors::RepositoryError};

/// Table name + key column pair driving every existence probe. The identifiers
/// are compile-time constants, never user input, so interpolating them into
/// SQL is safe; the id itself is always bound.
#[derive(Debug, Clone, Copy)]
pub struct TableMeta {
    pub table: &'static str,
    pub key: &'static str,
}

pub const RESTAURANTE: TableMeta = TableMeta {
    table: "restaurante",
    key: "id_rest",
};

pub const PRODUCTO: TableMeta = TableMeta {
    table: "producto",
    key: "id_prod",
};

pub const PEDIDO: TableMeta = TableMeta {
    table: "pedido",
    key: "id_pedido",
};

pub const DETALLE_PEDIDO: TableMeta = TableMeta {
    table: "detalle_pedido",
    key: "id_detalle",
};

pub const EMPLEADO: TableMeta = TableMeta {
    table: "empleado",
    key: "id_empleado",
};

/// Shared `SELECT 1 ... WHERE key = $1` probe used for foreign-key and
/// existence checks across all entities.
pub async fn exists(db: &ConnectionPool, meta: TableMeta, id: i32) -> Result<bool, RepositoryError> {
    let mut conn = db.acquire().await.map_err(RepositoryError::from)?;

    let sql = format!("SELECT 1 FROM {} WHERE {} = $1", meta.table, meta.key);

    let row = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

    Ok(row.is_some())
}
