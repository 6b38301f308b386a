//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::{CarStore, PgCarRepository};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CarStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    /// Estado de producción respaldado por PostgreSQL
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgCarRepository::new(pool)))
    }
}
