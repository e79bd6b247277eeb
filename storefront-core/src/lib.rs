pub mod dummyjson;
pub mod error;
pub mod pagination;
pub mod session;

pub use dummyjson::{CatalogClient, CatalogFetchResult, Product, catalog_client};
pub use error::CatalogError;
pub use pagination::{ITEMS_PER_PAGE, Pager};
pub use session::{CatalogSession, FETCH_ERROR_MESSAGE, LoadState};

/// Fetch the full product catalog using the shared client.
pub async fn load_catalog() -> Result<CatalogFetchResult, CatalogError> {
    catalog_client().fetch_catalog().await
}

/// Fetch raw image bytes using the shared client.
pub async fn load_image_bytes(url: &str) -> Result<Vec<u8>, CatalogError> {
    catalog_client().get_image_bytes(url).await
}
