use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::info;

use crate::controllers::car_controller::CarController;
use crate::dto::car_dto::{decode_lenient, CarResponse, CreateCarRequest, ListCarsQuery, UpdateCarRequest};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", put(update_car).delete(delete_car))
}

// Un id que no es numérico no puede existir: se responde 404
fn parse_car_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| not_found_error("Car", raw))
}

async fn list_cars(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<CarResponse>>> {
    info!("GET request received for getting cars");
    let params = ListCarsQuery::from_pairs(pairs);
    let controller = CarController::new(state.store.clone());
    let response = controller.list(params.into()).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<CarResponse>)> {
    info!("POST request received for adding a new car");
    let request: CreateCarRequest = decode_lenient(&body);
    let controller = CarController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<CarResponse>> {
    info!("PUT request received for updating car with id: {}", id);
    let id = parse_car_id(&id)?;
    let request: UpdateCarRequest = decode_lenient(&body);
    let controller = CarController::new(state.store.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    info!("DELETE request received for car with id: {}", id);
    let id = parse_car_id(&id)?;
    let controller = CarController::new(state.store.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
