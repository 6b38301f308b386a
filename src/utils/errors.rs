//! Sistema de manejo de errores
//!
//! Este módulo define los errores de los handlers y su conversión a
//! respuestas HTTP. Las respuestas de error llevan solo el status, sin cuerpo.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt::Display;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status HTTP que corresponde a cada variante
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::NotFound(msg) => tracing::warn!("🔍 Recurso no encontrado: {}", msg),
            AppError::Database(e) => tracing::error!("❌ Error de base de datos: {}", e),
            AppError::Internal(msg) => tracing::error!("❌ Error interno: {}", msg),
        }

        status.into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: impl Display) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}
