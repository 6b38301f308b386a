use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{Car, NewOwner, Owner};

// Owner embebido en los requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerPayload {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
}

impl From<OwnerPayload> for NewOwner {
    fn from(payload: OwnerPayload) -> Self {
        Self {
            name: payload.name,
            surname: payload.surname,
            patronymic: payload.patronymic,
        }
    }
}

// Request para crear un car
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCarRequest {
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub owner: OwnerPayload,
}

// Request para actualizar un car; los campos ausentes conservan su valor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCarRequest {
    pub reg_num: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub owner: Option<OwnerPayload>,
}

impl UpdateCarRequest {
    /// Sobrescribir los campos presentes sobre el car cargado.
    /// El owner se devuelve aparte porque pasa por el resolver.
    pub fn apply(self, car: &mut Car) -> Option<OwnerPayload> {
        if let Some(reg_num) = self.reg_num {
            car.reg_num = reg_num;
        }
        if let Some(mark) = self.mark {
            car.mark = mark;
        }
        if let Some(model) = self.model {
            car.model = model;
        }
        if let Some(year) = self.year {
            car.year = year;
        }
        self.owner
    }
}

// Parámetros de GET /cars. Los numéricos llegan como texto para que un
// valor no numérico caiga al default en vez de rechazar el request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCarsQuery {
    pub reg_num: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl ListCarsQuery {
    /// Armar los parámetros desde los pares del query string.
    /// Si una clave se repite gana el primer valor; las desconocidas se ignoran.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "regNum" => &mut query.reg_num,
                "mark" => &mut query.mark,
                "model" => &mut query.model,
                "year" => &mut query.year,
                "page" => &mut query.page,
                "pageSize" => &mut query.page_size,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

// Response de owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
}

// Response de car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: i64,
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: i32,
    pub owner: OwnerResponse,
}

impl From<Owner> for OwnerResponse {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            name: owner.name,
            surname: owner.surname,
            patronymic: owner.patronymic,
        }
    }
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            reg_num: car.reg_num,
            mark: car.mark,
            model: car.model,
            year: car.year,
            owner: car.owner.into(),
        }
    }
}

/// Request que se arma campo por campo desde un objeto JSON
pub trait FromJsonFields: Default {
    fn from_fields(fields: &Map<String, Value>) -> Self;
}

impl FromJsonFields for OwnerPayload {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            name: field(fields, "name").unwrap_or_default(),
            surname: field(fields, "surname").unwrap_or_default(),
            patronymic: field(fields, "patronymic").unwrap_or_default(),
        }
    }
}

impl FromJsonFields for CreateCarRequest {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            reg_num: field(fields, "regNum").unwrap_or_default(),
            mark: field(fields, "mark").unwrap_or_default(),
            model: field(fields, "model").unwrap_or_default(),
            year: field(fields, "year").unwrap_or_default(),
            owner: object(fields, "owner").unwrap_or_default(),
        }
    }
}

impl FromJsonFields for UpdateCarRequest {
    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            reg_num: field(fields, "regNum"),
            mark: field(fields, "mark"),
            model: field(fields, "model"),
            year: field(fields, "year"),
            owner: object(fields, "owner"),
        }
    }
}

/// Campo presente y del tipo correcto; un `null` cuenta como ausente
fn field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key).filter(|v| !v.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::warn!("⚠️ Campo '{}' ignorado: {}", key, e);
            None
        }
    }
}

fn object<T: FromJsonFields>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    match fields.get(key)? {
        Value::Object(inner) => Some(T::from_fields(inner)),
        Value::Null => None,
        other => {
            tracing::warn!("⚠️ Campo '{}' ignorado: se esperaba un objeto, llegó {}", key, other);
            None
        }
    }
}

/// Decodificar un cuerpo JSON. Un cuerpo vacío, malformado o que no es un
/// objeto da el valor por defecto; un campo con tipo incorrecto se ignora
/// sin afectar al resto.
pub fn decode_lenient<T: FromJsonFields>(body: &[u8]) -> T {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => T::from_fields(&fields),
        Ok(other) => {
            tracing::warn!("⚠️ Cuerpo JSON no es un objeto, se usa el valor por defecto: {}", other);
            T::default()
        }
        Err(e) => {
            tracing::warn!("⚠️ Cuerpo JSON inválido, se usa el valor por defecto: {}", e);
            T::default()
        }
    }
}
