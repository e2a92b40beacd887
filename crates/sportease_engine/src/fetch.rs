use async_trait::async_trait;
use site_logging::site_debug;

use crate::types::{ActivationId, FetchError, VenuePage};

/// Issues one venue retrieval per call. Implementations must not retry,
/// time out on their own, or reorder completions.
#[async_trait]
pub trait VenueSource: Send + Sync {
    async fn fetch_venues(
        &self,
        activation: ActivationId,
        locator: &str,
    ) -> Result<VenuePage, FetchError>;
}

/// `VenueSource` over a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpVenueSource {
    client: reqwest::Client,
}

impl HttpVenueSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VenueSource for HttpVenueSource {
    async fn fetch_venues(
        &self,
        activation: ActivationId,
        locator: &str,
    ) -> Result<VenuePage, FetchError> {
        site_debug!("venues fetch start activation={activation} locator={locator}");

        let parsed = reqwest::Url::parse(locator)
            .map_err(|err| FetchError::InvalidLocator(err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        // The status line is not consulted: whatever body arrives is decoded
        // as the payload, and only a decode miss counts as a failure.
        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| FetchError::Payload(err.to_string()))
    }
}
