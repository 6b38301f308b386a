//! Tests de PgCarRepository contra un PostgreSQL real.
//!
//! Solo corren si TEST_DATABASE_URL está definida; cada test trabaja en su
//! propio schema y lo borra al terminar.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use car_registry::database::ensure_schema;
use car_registry::dto::car_dto::ListCarsQuery;
use car_registry::models::{NewCar, NewOwner, Owner};
use car_registry::repositories::{CarStore, PgCarRepository};
use car_registry::services::car_query::CarQuery;
use car_registry::utils::errors::AppError;

struct TestDb {
    admin: PgPool,
    pool: PgPool,
    schema: String,
}

impl TestDb {
    async fn cleanup(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .unwrap();
        self.admin.close().await;
    }
}

async fn test_db(test: &str) -> Option<TestDb> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set, skipping {}", test);
            return None;
        }
    };
    let options = PgConnectOptions::from_str(&url).unwrap();
    let schema = format!("car_registry_{}_{}", test, std::process::id());

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(options.clone())
        .await
        .unwrap();
    sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", schema))
        .execute(&admin)
        .await
        .unwrap();
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&admin)
        .await
        .unwrap();

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(options.options([("search_path", schema.as_str())]))
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();

    Some(TestDb { admin, pool, schema })
}

fn new_owner(name: &str, surname: &str) -> NewOwner {
    NewOwner {
        name: name.to_string(),
        surname: surname.to_string(),
        patronymic: String::new(),
    }
}

fn new_car(reg_num: &str, mark: &str, year: i32, owner: &Owner) -> NewCar {
    NewCar {
        reg_num: reg_num.to_string(),
        mark: mark.to_string(),
        model: "Vesta".to_string(),
        year,
        owner_id: owner.id,
    }
}

fn list_query(pairs: &[(&str, &str)]) -> CarQuery {
    ListCarsQuery::from_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string()))).into()
}

#[tokio::test]
async fn test_insert_and_find_car_with_owner() {
    let Some(db) = test_db("insert_find").await else { return };
    let repo = PgCarRepository::new(db.pool.clone());

    let owner = repo.insert_owner(new_owner("Ann", "Lee")).await.unwrap();
    let car = repo.insert_car(new_car("A1", "Lada", 2002, &owner)).await.unwrap();

    assert!(car.id > 0);
    assert_eq!(car.owner, owner);

    let found = repo.find_car(car.id).await.unwrap().unwrap();
    assert_eq!(found, car);
    assert!(repo.find_car(car.id + 1000).await.unwrap().is_none());

    let by_name = repo.find_owner_by_name("Ann", "Lee").await.unwrap();
    assert_eq!(by_name, Some(owner));
    assert!(repo.find_owner_by_name("Ann", "Other").await.unwrap().is_none());

    db.cleanup().await;
}

#[tokio::test]
async fn test_list_cars_filters_and_paginates() {
    let Some(db) = test_db("list").await else { return };
    let repo = PgCarRepository::new(db.pool.clone());

    let ann = repo.insert_owner(new_owner("Ann", "Lee")).await.unwrap();
    let bob = repo.insert_owner(new_owner("Bob", "Ray")).await.unwrap();
    for i in 0..5 {
        repo.insert_car(new_car(&format!("R{}", i), "Lada", 2000 + i, &ann))
            .await
            .unwrap();
    }
    repo.insert_car(new_car("K1", "Kia", 2001, &bob)).await.unwrap();

    let page = repo
        .list_cars(&list_query(&[("mark", "Lada"), ("page", "2"), ("pageSize", "2")]))
        .await
        .unwrap();
    let reg_nums: Vec<&str> = page.iter().map(|c| c.reg_num.as_str()).collect();
    assert_eq!(reg_nums, vec!["R2", "R3"]);

    let by_year = repo.list_cars(&list_query(&[("year", "2001")])).await.unwrap();
    let reg_nums: Vec<&str> = by_year.iter().map(|c| c.reg_num.as_str()).collect();
    assert_eq!(reg_nums, vec!["R1", "K1"]);
    assert_eq!(by_year[1].owner, bob);

    let all = repo.list_cars(&list_query(&[])).await.unwrap();
    assert_eq!(all.len(), 6);

    db.cleanup().await;
}

#[tokio::test]
async fn test_save_car_updates_fields_and_owner() {
    let Some(db) = test_db("save").await else { return };
    let repo = PgCarRepository::new(db.pool.clone());

    let ann = repo.insert_owner(new_owner("Ann", "Lee")).await.unwrap();
    let bob = repo.insert_owner(new_owner("Bob", "Ray")).await.unwrap();
    let mut car = repo.insert_car(new_car("A1", "Lada", 2002, &ann)).await.unwrap();

    car.model = "Granta".to_string();
    car.owner = bob.clone();
    let saved = repo.save_car(&car).await.unwrap();
    assert_eq!(saved, car);
    assert_eq!(repo.find_car(car.id).await.unwrap().unwrap().owner, bob);

    let mut missing = car.clone();
    missing.id += 1000;
    assert!(matches!(
        repo.save_car(&missing).await,
        Err(AppError::NotFound(_))
    ));

    db.cleanup().await;
}

#[tokio::test]
async fn test_delete_car_keeps_owner() {
    let Some(db) = test_db("delete").await else { return };
    let repo = PgCarRepository::new(db.pool.clone());

    let ann = repo.insert_owner(new_owner("Ann", "Lee")).await.unwrap();
    let car = repo.insert_car(new_car("A1", "Lada", 2002, &ann)).await.unwrap();

    repo.delete_car(car.id).await.unwrap();

    assert!(repo.find_car(car.id).await.unwrap().is_none());
    assert_eq!(repo.find_owner_by_name("Ann", "Lee").await.unwrap(), Some(ann));

    db.cleanup().await;
}
