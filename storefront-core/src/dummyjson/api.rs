use super::{client::CatalogClient, models::*};
use crate::error::CatalogError;
use log::info;

const PRODUCTS_ENDPOINT: &str = "https://dummyjson.com/products";

impl CatalogClient {
    /// Fetch the full product catalog in one request. Invoked once per
    /// session; there is no retry, timeout, or cancellation path.
    pub async fn fetch_catalog(&self) -> Result<CatalogFetchResult, CatalogError> {
        let response = self.call(PRODUCTS_ENDPOINT).await?;
        let body = response.text().await?;
        let envelope: ProductsEnvelope = serde_json::from_str(&body)?;

        let mut products = Vec::new();
        for product_data in &envelope.products {
            match Product::from_product_object(product_data) {
                Ok(product) => products.push(product),
                Err(e) => {
                    info!("Skipping invalid product: {}", e);
                    continue;
                }
            }
        }

        Ok(CatalogFetchResult {
            products,
            total_available: envelope.total,
            fetched_at: time::OffsetDateTime::now_utc(),
        })
    }
}
