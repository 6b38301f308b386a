//! Schema explícito de la base de datos
//!
//! Las tablas `people` y `cars` se crean al arrancar si no existen.
//! `cars.owner_id` referencia a `people.id`. No hay restricción de unicidad
//! sobre (name, surname): el índice solo acelera la búsqueda por clave natural.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

pub const CREATE_PEOPLE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS people (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL DEFAULT '',
    surname     TEXT NOT NULL DEFAULT '',
    patronymic  TEXT NOT NULL DEFAULT ''
)
"#;

pub const CREATE_PEOPLE_NAME_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS people_name_surname_idx ON people (name, surname)
"#;

pub const CREATE_CARS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cars (
    id          BIGSERIAL PRIMARY KEY,
    reg_num     TEXT NOT NULL DEFAULT '',
    mark        TEXT NOT NULL DEFAULT '',
    model       TEXT NOT NULL DEFAULT '',
    year        INTEGER NOT NULL DEFAULT 0,
    owner_id    BIGINT NOT NULL REFERENCES people (id)
)
"#;

/// Sentencias en orden de dependencia
pub const SCHEMA: [&str; 3] = [CREATE_PEOPLE_TABLE, CREATE_PEOPLE_NAME_INDEX, CREATE_CARS_TABLE];

/// Crear las tablas si no existen
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to apply schema statement: {}", statement.trim()))?;
    }

    info!("🗄️ Schema de base de datos verificado");
    Ok(())
}
