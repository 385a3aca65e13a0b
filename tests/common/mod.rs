#![allow(dead_code, unused_macros)]

use std::str::FromStr;

use hrms_lite::{Config, Store};
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Fresh in-memory database. A single never-recycled connection keeps the data alive
/// for the whole test.
pub async fn memory_store() -> Store {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("failed to open in-memory sqlite");

    let store = Store::new(pool);
    store.init_schema().await.expect("failed to create schema");
    store
}

pub fn test_config() -> Config {
    Config {
        rate_per_min: 0,
        ..Config::default()
    }
}

pub fn employee_body(id: &str, email: &str) -> Value {
    json!({
        "employee_id": id,
        "full_name": format!("Employee {id}"),
        "email": email,
        "department": "Engineering",
    })
}

/// Builds the full application around `$store`, the same way `main` does.
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(actix_web::web::Data::new($store.clone()))
                .configure(|cfg| hrms_lite::routes::configure(cfg, &common::test_config())),
        )
        .await
    };
}

/// Sends a request and returns `(status, json body)`.
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let bytes = actix_web::test::read_body(resp).await;
        let body: serde_json::Value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not json")
        };
        (status, body)
    }};
}
