//! Servicios del sistema
//!
//! Lógica compartida por los controllers: construcción de consultas de
//! listado y resolución de owners.

pub mod car_query;
pub mod owner_resolver;

pub use owner_resolver::resolve_owner;
