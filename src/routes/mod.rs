pub mod car_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(car_routes::create_car_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}
