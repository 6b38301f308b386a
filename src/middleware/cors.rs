//! Middleware de CORS
//!
//! Permite llamadas desde cualquier origen a los endpoints de /cars.

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Crear middleware de CORS para los métodos que expone la API
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .max_age(std::time::Duration::from_secs(3600))
}
