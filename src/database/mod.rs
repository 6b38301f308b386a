//! Módulo de base de datos
//!
//! Maneja la conexión y el schema de PostgreSQL

pub mod connection;
pub mod schema;

pub use connection::create_pool;
pub use schema::ensure_schema;
