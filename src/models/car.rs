//! Modelo de Car
//!
//! Este módulo contiene el struct Car y las filas de almacenamiento que lo
//! alimentan. `CarRow` mapea el join de cars con people; la conversión a
//! `Car` es explícita.

use sqlx::FromRow;

use super::owner::Owner;

/// Car con su owner resuelto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub owner: Owner,
}

/// Fila del join `cars JOIN people`
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: i64,
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub owner_id: i64,
    pub owner_name: String,
    pub owner_surname: String,
    pub owner_patronymic: String,
}

/// Datos para insertar un car con el owner ya resuelto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub owner_id: i64,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Self {
            id: row.id,
            reg_num: row.reg_num,
            mark: row.mark,
            model: row.model,
            year: row.year,
            owner: Owner {
                id: row.owner_id,
                name: row.owner_name,
                surname: row.owner_surname,
                patronymic: row.owner_patronymic,
            },
        }
    }
}

impl NewCar {
    /// Armar el car completo una vez insertado
    pub fn with_id(self, id: i64, owner: Owner) -> Car {
        debug_assert_eq!(self.owner_id, owner.id);
        Car {
            id,
            reg_num: self.reg_num,
            mark: self.mark,
            model: self.model,
            year: self.year,
            owner,
        }
    }
}
