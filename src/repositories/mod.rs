//! Acceso al almacenamiento
//!
//! `CarStore` es la costura entre los controllers y la base de datos. La
//! implementación de producción es `PgCarRepository`; los tests usan una
//! implementación en memoria.

pub mod car_repository;

use async_trait::async_trait;

use crate::models::{Car, NewCar, NewOwner, Owner};
use crate::services::car_query::CarQuery;
use crate::utils::errors::AppError;

pub use car_repository::PgCarRepository;

#[async_trait]
pub trait CarStore: Send + Sync {
    /// Cars que cumplen el filtro, ordenados por id y paginados
    async fn list_cars(&self, query: &CarQuery) -> Result<Vec<Car>, AppError>;

    async fn find_car(&self, id: i64) -> Result<Option<Car>, AppError>;

    async fn insert_car(&self, car: NewCar) -> Result<Car, AppError>;

    /// Persistir todos los campos del car, incluida la referencia al owner
    async fn save_car(&self, car: &Car) -> Result<Car, AppError>;

    async fn delete_car(&self, id: i64) -> Result<(), AppError>;

    /// Primer owner con ese (name, surname), si existe
    async fn find_owner_by_name(&self, name: &str, surname: &str) -> Result<Option<Owner>, AppError>;

    async fn insert_owner(&self, owner: NewOwner) -> Result<Owner, AppError>;
}
