//! Modelo de Owner
//!
//! Mapea exactamente a la tabla people. Los owners solo se insertan,
//! nunca se actualizan ni se borran.

use sqlx::FromRow;

/// Owner persistido
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
}

/// Datos para insertar un owner nuevo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOwner {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
}

impl NewOwner {
    /// Asignar el identificador generado por la base
    pub fn with_id(self, id: i64) -> Owner {
        Owner {
            id,
            name: self.name,
            surname: self.surname,
            patronymic: self.patronymic,
        }
    }
}
