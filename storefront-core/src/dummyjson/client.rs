use crate::error::CatalogError;
use lazy_static::lazy_static;
use log::debug;
use tokio::time::{Duration, Instant};

const USER_AGENT: &str = "storefront-core/0.1";
const ACCEPT: &str = "*/*";
const REQUEST_COOLDOWN: Duration = Duration::from_millis(100);

// Blocking mutex: the lock is only held to compute the next allowed call time
lazy_static! {
    static ref LAST_CALL: std::sync::Mutex<Instant> =
        std::sync::Mutex::new(Instant::now() - REQUEST_COOLDOWN);
    static ref CATALOG_CLIENT: CatalogClient =
        CatalogClient::new().expect("Failed to create CatalogClient");
}

/// Process-wide shared client instance.
pub fn catalog_client() -> &'static CatalogClient {
    &CATALOG_CLIENT
}

#[derive(Debug)]
pub struct CatalogClient {
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, CatalogError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(CatalogClient { client })
    }

    /// One GET, spaced at least REQUEST_COOLDOWN apart from other calls
    /// through this client. Non-2xx statuses are passed through to the
    /// caller unchecked.
    pub async fn call(&self, uri: &str) -> Result<reqwest::Response, CatalogError> {
        let next_call = {
            let mut last = LAST_CALL.lock().unwrap();
            *last += REQUEST_COOLDOWN;
            *last
        };
        tokio::time::sleep_until(next_call).await;

        debug!("calling catalog endpoint: {}", uri);
        let response = self.client.get(uri).send().await?;
        Ok(response)
    }

    /// Fetch raw image bytes for display by a rendering surface.
    pub async fn get_image_bytes(&self, url: &str) -> Result<Vec<u8>, CatalogError> {
        let response = self.call(url).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new().expect("Failed to create CatalogClient")
    }
}
