//! Construcción de consultas de listado
//!
//! Traduce los parámetros de `GET /cars` a un filtro de igualdad exacta y
//! a una paginación por offset.

use crate::dto::car_dto::ListCarsQuery;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Filtro de igualdad exacta. Los campos vacíos o en cero no se aplican.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    pub reg_num: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

/// Página solicitada, siempre con page >= 1 y page_size >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub page_size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: if page >= 1 { page } else { DEFAULT_PAGE },
            page_size: if page_size >= 1 { page_size } else { DEFAULT_PAGE_SIZE },
        }
    }

    /// Registros a saltar: (page - 1) * page_size
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// Consulta de listado ya normalizada
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarQuery {
    pub filter: CarFilter,
    pub pagination: Pagination,
}

impl From<ListCarsQuery> for CarQuery {
    fn from(params: ListCarsQuery) -> Self {
        let filter = CarFilter {
            reg_num: non_empty(params.reg_num),
            mark: non_empty(params.mark),
            model: non_empty(params.model),
            year: parse_number::<i32>(params.year.as_deref()).filter(|year| *year != 0),
        };

        let pagination = Pagination::new(
            parse_number(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_number(params.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
        );

        Self { filter, pagination }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}
