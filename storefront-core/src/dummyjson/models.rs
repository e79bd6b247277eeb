use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// Response envelope of the products endpoint. The endpoint paginates
/// server-side with `total`/`skip`/`limit`, but we always take the single
/// unparameterized response and paginate client-side.
#[derive(Serialize, Deserialize, Debug)]
pub struct ProductsEnvelope {
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
    pub products: Vec<serde_json::Map<String, Value>>,
}

/// One product record. Immutable once loaded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub images: Vec<String>,
}

impl Product {
    pub fn from_product_object(
        d: &serde_json::Map<String, Value>,
    ) -> Result<Product, CatalogError> {
        let id = d
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| CatalogError::InvalidProduct("Missing id field".to_string()))?;

        let title = d
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| CatalogError::InvalidProduct("Missing title field".to_string()))?
            .to_string();

        let price = d
            .get("price")
            .and_then(Value::as_f64)
            .ok_or_else(|| CatalogError::InvalidProduct("Missing price field".to_string()))?;

        // Image list may be absent or empty; both render as placeholders.
        let images = d
            .get("images")
            .and_then(Value::as_array)
            .map(|urls| {
                urls.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Product {
            id,
            title,
            price,
            images,
        })
    }

    /// First image URL, if the product has any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Successful catalog load: the products plus fetch metadata.
#[derive(Debug, Clone)]
pub struct CatalogFetchResult {
    pub products: Vec<Product>,
    pub total_available: usize,
    pub fetched_at: OffsetDateTime,
}
