use std::sync::Arc;

use tracing::info;

use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::models::NewCar;
use crate::repositories::CarStore;
use crate::services::car_query::CarQuery;
use crate::services::resolve_owner;
use crate::utils::errors::{not_found_error, AppResult};

pub struct CarController {
    store: Arc<dyn CarStore>,
}

impl CarController {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, query: CarQuery) -> AppResult<Vec<CarResponse>> {
        let cars = self.store.list_cars(&query).await?;

        info!(
            "📋 {} cars devueltos (page={}, pageSize={})",
            cars.len(),
            query.pagination.page,
            query.pagination.page_size
        );

        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn create(&self, request: CreateCarRequest) -> AppResult<CarResponse> {
        // Resolver el owner antes de insertar el car
        let owner = resolve_owner(self.store.as_ref(), request.owner).await?;

        let car = self
            .store
            .insert_car(NewCar {
                reg_num: request.reg_num,
                mark: request.mark,
                model: request.model,
                year: request.year,
                owner_id: owner.id,
            })
            .await?;

        info!("🚗 Car creado: id={}, owner_id={}", car.id, car.owner.id);
        Ok(car.into())
    }

    pub async fn update(&self, id: i64, request: UpdateCarRequest) -> AppResult<CarResponse> {
        let mut car = self
            .store
            .find_car(id)
            .await?
            .ok_or_else(|| not_found_error("Car", id))?;

        if let Some(owner) = request.apply(&mut car) {
            car.owner = resolve_owner(self.store.as_ref(), owner).await?;
        }

        let saved = self.store.save_car(&car).await?;
        info!("✏️ Car actualizado: id={}", saved.id);
        Ok(saved.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.store.find_car(id).await?.is_none() {
            return Err(not_found_error("Car", id));
        }

        self.store.delete_car(id).await?;
        info!("🗑️ Car eliminado: id={}", id);
        Ok(())
    }
}
