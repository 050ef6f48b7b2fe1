//! # Products
//!
//! A minimal product catalog CRUD API.
//!
//! Layers:
//! - `controllers`: HTTP entry points, one downstream call each
//! - `services`: list scans and in-place mutation over an in-memory store
//! - `models`: plain data records
//!
//! `routes` wires the controller into an axum `Router` with OpenAPI documentation.

#![warn(rust_2018_idioms)]

pub mod controllers;
pub mod models;
pub mod routes;
pub mod services;

pub use controllers::ProductsController;
pub use models::{Product, ProductInput};
pub use routes::router;
pub use services::ProductService;
