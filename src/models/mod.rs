//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL de `database::schema`.

pub mod car;
pub mod owner;

pub use car::{Car, CarRow, NewCar};
pub use owner::{NewOwner, Owner};
