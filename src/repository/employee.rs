use crate::{
    abstract_trait::{EmployeeCommandRepositoryTrait, EmployeeQueryRepositoryTrait},
    config::ConnectionPool,
    domain::requests::{CreateEmployeeRequest, UpdateEmployeeRequest},
    errors::RepositoryError,
    model::Employee,
    repository::meta,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct EmployeeQueryRepository {
    db: ConnectionPool,
}

impl EmployeeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeQueryRepositoryTrait for EmployeeQueryRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id_empleado, nombre, rol, id_rest
            FROM empleado
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to list employees: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        meta::exists(&self.db, meta::EMPLEADO, id).await
    }
}

pub struct EmployeeCommandRepository {
    db: ConnectionPool,
}

impl EmployeeCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeCommandRepositoryTrait for EmployeeCommandRepository {
    async fn create(&self, req: &CreateEmployeeRequest) -> Result<Employee, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO empleado (id_empleado, nombre, rol, id_rest)
            VALUES ($1, $2, $3, $4)
            RETURNING id_empleado, nombre, rol, id_rest
            "#,
        )
        .bind(req.id_empleado)
        .bind(&req.nombre)
        .bind(&req.rol)
        .bind(req.id_rest)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create employee {:?}: {err:?}", req.nombre);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created employee ID {} ({})",
            result.id_empleado, result.nombre
        );
        Ok(result)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateEmployeeRequest,
    ) -> Result<Option<Employee>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE empleado
            SET nombre = $2,
                rol = $3,
                id_rest = $4
            WHERE id_empleado = $1
            RETURNING id_empleado, nombre, rol, id_rest
            "#,
        )
        .bind(id)
        .bind(&req.nombre)
        .bind(&req.rol)
        .bind(req.id_rest)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update employee ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🔄 Updated employee ID {id}");
        }
        Ok(result)
    }

    async fn delete(&self, id: i32) -> Result<Option<Employee>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Employee>(
            r#"
            DELETE FROM empleado
            WHERE id_empleado = $1
            RETURNING id_empleado, nombre, rol, id_rest
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete employee ID {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        if result.is_some() {
            info!("🗑️ Deleted employee ID {id}");
        }
        Ok(result)
    }
}
