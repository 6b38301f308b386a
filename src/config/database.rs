//! Configuración de base de datos
//!
//! Este módulo arma las opciones de conexión a PostgreSQL a partir de las
//! variables DRIVER y POSTGRES_*, y crea el pool compartido con SQLx.

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::env;
use std::time::Duration;

use super::environment::{parsed_or, required, ConfigError};

/// Configuración de la base de datos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub driver: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub database: String,
    pub password: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Leer la configuración desde el entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Leer la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let driver = required(&lookup, "DRIVER")?;
        if !matches!(driver.as_str(), "postgres" | "postgresql") {
            return Err(ConfigError::UnsupportedDriver(driver));
        }

        let host = required(&lookup, "POSTGRES_HOST")?;
        let raw_port = required(&lookup, "POSTGRES_PORT")?;
        let port = raw_port.trim().parse().map_err(|_| ConfigError::Invalid {
            var: "POSTGRES_PORT",
            value: raw_port.clone(),
        })?;
        let user = required(&lookup, "POSTGRES_USER")?;
        let database = required(&lookup, "POSTGRES_DB")?;
        let password = required(&lookup, "POSTGRES_PASSWORD")?;

        let max_connections = parsed_or(&lookup, "DB_MAX_CONNECTIONS", 10)?;
        let connect_timeout = Duration::from_secs(parsed_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 30)?);

        Ok(Self {
            driver,
            host,
            port,
            user,
            database,
            password,
            max_connections,
            connect_timeout,
        })
    }

    /// Opciones de conexión, sin SSL
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }

    /// Descripción de la conexión apta para logs
    pub fn masked(&self) -> String {
        format!(
            "{}://{}:***@{}:{}/{}",
            self.driver, self.user, self.host, self.port, self.database
        )
    }

    /// Crear el pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connect_timeout)
            .connect_with(self.connect_options())
            .await
    }
}
