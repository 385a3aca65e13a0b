pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod ui;
pub mod utils;

pub use client::{ApiClient, ClientError};
pub use config::Config;
pub use db::{Store, StoreError};
pub use error::ApiError;
