use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::CarStore;
use crate::models::{Car, CarRow, NewCar, NewOwner, Owner};
use crate::services::car_query::{CarFilter, CarQuery};
use crate::utils::errors::AppError;

const SELECT_CARS: &str = r#"
    SELECT c.id, c.reg_num, c.mark, c.model, c.year,
           p.id AS owner_id, p.name AS owner_name,
           p.surname AS owner_surname, p.patronymic AS owner_patronymic
    FROM cars c
    JOIN people p ON p.id = c.owner_id
"#;

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_owner(&self, id: i64) -> Result<Owner, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            "SELECT id, name, surname, patronymic FROM people WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(owner)
    }
}

/// Armar el SELECT paginado con solo los filtros presentes
pub fn build_list_query(query: &CarQuery) -> QueryBuilder<'_, Postgres> {
    let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_CARS);
    push_filter(&mut qb, &query.filter);

    qb.push(" ORDER BY c.id LIMIT ")
        .push_bind(query.pagination.limit())
        .push(" OFFSET ")
        .push_bind(query.pagination.offset());

    qb
}

fn push_filter<'a>(qb: &mut QueryBuilder<'a, Postgres>, filter: &'a CarFilter) {
    let mut first = true;
    let mut keyword = |qb: &mut QueryBuilder<'a, Postgres>| {
        qb.push(if first { " WHERE " } else { " AND " });
        first = false;
    };

    if let Some(reg_num) = &filter.reg_num {
        keyword(qb);
        qb.push("c.reg_num = ").push_bind(reg_num.as_str());
    }
    if let Some(mark) = &filter.mark {
        keyword(qb);
        qb.push("c.mark = ").push_bind(mark.as_str());
    }
    if let Some(model) = &filter.model {
        keyword(qb);
        qb.push("c.model = ").push_bind(model.as_str());
    }
    if let Some(year) = filter.year {
        keyword(qb);
        qb.push("c.year = ").push_bind(year);
    }
}

#[async_trait]
impl CarStore for PgCarRepository {
    async fn list_cars(&self, query: &CarQuery) -> Result<Vec<Car>, AppError> {
        let rows = build_list_query(query)
            .build_query_as::<CarRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn find_car(&self, id: i64) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>(&format!("{} WHERE c.id = $1", SELECT_CARS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Car::from))
    }

    async fn insert_car(&self, car: NewCar) -> Result<Car, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO cars (reg_num, mark, model, year, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&car.reg_num)
        .bind(&car.mark)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.owner_id)
        .fetch_one(&self.pool)
        .await?;

        let owner = self.find_owner(car.owner_id).await?;
        Ok(car.with_id(id, owner))
    }

    async fn save_car(&self, car: &Car) -> Result<Car, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE cars
            SET reg_num = $2, mark = $3, model = $4, year = $5, owner_id = $6
            WHERE id = $1
            "#,
        )
        .bind(car.id)
        .bind(&car.reg_num)
        .bind(&car.mark)
        .bind(&car.model)
        .bind(car.year)
        .bind(car.owner.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Car with id '{}' not found", car.id)));
        }

        self.find_car(car.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car with id '{}' not found", car.id)))
    }

    async fn delete_car(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_owner_by_name(&self, name: &str, surname: &str) -> Result<Option<Owner>, AppError> {
        let owner = sqlx::query_as::<_, Owner>(
            r#"
            SELECT id, name, surname, patronymic
            FROM people
            WHERE name = $1 AND surname = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .bind(surname)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    async fn insert_owner(&self, owner: NewOwner) -> Result<Owner, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO people (name, surname, patronymic) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&owner.name)
        .bind(&owner.surname)
        .bind(&owner.patronymic)
        .fetch_one(&self.pool)
        .await?;

        Ok(owner.with_id(id))
    }
}
