#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use car_registry::models::{Car, NewCar, NewOwner, Owner};
use car_registry::repositories::CarStore;
use car_registry::services::car_query::CarQuery;
use car_registry::utils::errors::AppError;
use car_registry::{create_router, AppState};

#[derive(Default)]
struct Tables {
    people: Vec<Owner>,
    cars: Vec<(i64, NewCar)>,
    next_owner_id: i64,
    next_car_id: i64,
}

impl Tables {
    fn owner(&self, id: i64) -> Result<Owner, AppError> {
        self.people
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| AppError::Internal(format!("dangling owner_id {}", id)))
    }

    fn joined(&self, id: i64, car: &NewCar) -> Result<Car, AppError> {
        Ok(car.clone().with_id(id, self.owner(car.owner_id)?))
    }
}

/// CarStore en memoria con las mismas semánticas que PgCarRepository
#[derive(Default)]
pub struct MemoryCarStore {
    tables: Mutex<Tables>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryCarStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn owner_count(&self) -> usize {
        self.tables.lock().unwrap().people.len()
    }

    pub fn car_count(&self) -> usize {
        self.tables.lock().unwrap().cars.len()
    }

    pub fn owners(&self) -> Vec<Owner> {
        self.tables.lock().unwrap().people.clone()
    }

    fn check_read(&self) -> Result<(), AppError> {
        if self.fail_reads {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CarStore for MemoryCarStore {
    async fn list_cars(&self, query: &CarQuery) -> Result<Vec<Car>, AppError> {
        self.check_read()?;
        let tables = self.tables.lock().unwrap();
        let filter = &query.filter;

        tables
            .cars
            .iter()
            .filter(|(_, car)| {
                filter.reg_num.as_ref().map_or(true, |v| &car.reg_num == v)
                    && filter.mark.as_ref().map_or(true, |v| &car.mark == v)
                    && filter.model.as_ref().map_or(true, |v| &car.model == v)
                    && filter.year.map_or(true, |v| car.year == v)
            })
            .skip(query.pagination.offset() as usize)
            .take(query.pagination.limit() as usize)
            .map(|(id, car)| tables.joined(*id, car))
            .collect()
    }

    async fn find_car(&self, id: i64) -> Result<Option<Car>, AppError> {
        self.check_read()?;
        let tables = self.tables.lock().unwrap();
        match tables.cars.iter().find(|(car_id, _)| *car_id == id) {
            Some((id, car)) => Ok(Some(tables.joined(*id, car)?)),
            None => Ok(None),
        }
    }

    async fn insert_car(&self, car: NewCar) -> Result<Car, AppError> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        let owner = tables.owner(car.owner_id)?;
        tables.next_car_id += 1;
        let id = tables.next_car_id;
        tables.cars.push((id, car.clone()));
        Ok(car.with_id(id, owner))
    }

    async fn save_car(&self, car: &Car) -> Result<Car, AppError> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        tables.owner(car.owner.id)?;
        let slot = tables
            .cars
            .iter_mut()
            .find(|(id, _)| *id == car.id)
            .ok_or_else(|| AppError::NotFound(format!("Car with id '{}' not found", car.id)))?;
        slot.1 = NewCar {
            reg_num: car.reg_num.clone(),
            mark: car.mark.clone(),
            model: car.model.clone(),
            year: car.year,
            owner_id: car.owner.id,
        };
        let (id, stored) = slot.clone();
        tables.joined(id, &stored)
    }

    async fn delete_car(&self, id: i64) -> Result<(), AppError> {
        self.check_write()?;
        self.tables
            .lock()
            .unwrap()
            .cars
            .retain(|(car_id, _)| *car_id != id);
        Ok(())
    }

    async fn find_owner_by_name(&self, name: &str, surname: &str) -> Result<Option<Owner>, AppError> {
        self.check_read()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .people
            .iter()
            .find(|o| o.name == name && o.surname == surname)
            .cloned())
    }

    async fn insert_owner(&self, owner: NewOwner) -> Result<Owner, AppError> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_owner_id += 1;
        let owner = owner.with_id(tables.next_owner_id);
        tables.people.push(owner.clone());
        Ok(owner)
    }
}

/// App de test con el store en memoria
pub fn test_app(store: Arc<MemoryCarStore>) -> Router {
    create_router(AppState::new(store))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse { status, body }
}

pub fn car_json(reg_num: &str, mark: &str, model: &str, year: i32, name: &str, surname: &str) -> String {
    serde_json::json!({
        "regNum": reg_num,
        "mark": mark,
        "model": model,
        "year": year,
        "owner": { "name": name, "surname": surname, "patronymic": "" }
    })
    .to_string()
}
