use crate::{config::ConnectionPool, di::DependenciesInject};

#[derive(Clone)]
pub struct AppState {
    pub db: ConnectionPool,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let di_container = DependenciesInject::new(pool.clone());

        Self {
            db: pool,
            di_container,
        }
    }
}
