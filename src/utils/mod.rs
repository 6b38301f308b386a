//! Utilidades del sistema
//!
//! Manejo de errores compartido por controllers y routes.

pub mod errors;
