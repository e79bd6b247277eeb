use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    Network(reqwest::Error),
    Json(serde_json::Error),
    InvalidProduct(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(e) => write!(f, "Network error: {}", e),
            CatalogError::Json(e) => write!(f, "JSON parsing error: {}", e),
            CatalogError::InvalidProduct(e) => write!(f, "Invalid product: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Network(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}
