//! Configuración de conexión a PostgreSQL
//!
//! Abre el pool único que comparten todos los handlers durante la vida
//! del proceso.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Crear el pool de conexiones y verificar que la base responde
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    info!("🔌 Conectando a {}", config.masked());

    let pool = config
        .create_pool()
        .await
        .with_context(|| format!("Failed to connect to database {}", config.masked()))?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Database did not answer the connection check")?;

    info!("✅ Base de datos conectada");
    Ok(pool)
}
