pub mod api;
pub mod client;
pub mod models;

pub use client::{CatalogClient, catalog_client};
pub use models::{CatalogFetchResult, Product, ProductsEnvelope};
