//! Resolución de owners por clave natural
//!
//! Busca un owner por (name, surname) y lo reutiliza; si no existe, lo
//! inserta con los datos del request. La búsqueda y la inserción son dos
//! operaciones independientes: dos requests concurrentes con el mismo par
//! pueden insertar owners duplicados.

use tracing::debug;

use crate::dto::car_dto::OwnerPayload;
use crate::models::Owner;
use crate::repositories::CarStore;
use crate::utils::errors::AppError;

pub async fn resolve_owner(store: &dyn CarStore, payload: OwnerPayload) -> Result<Owner, AppError> {
    if let Some(existing) = store
        .find_owner_by_name(&payload.name, &payload.surname)
        .await?
    {
        debug!(
            "👤 Owner existente reutilizado: id={} ({} {})",
            existing.id, existing.name, existing.surname
        );
        return Ok(existing);
    }

    let owner = store.insert_owner(payload.into()).await?;
    debug!(
        "👤 Owner nuevo insertado: id={} ({} {})",
        owner.id, owner.name, owner.surname
    );
    Ok(owner)
}
