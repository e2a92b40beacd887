use serde::Deserialize;
use thiserror::Error;

pub type ActivationId = u64;

/// Wire form of a venue record, as the listing endpoint serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub price_per_hour: u32,
    pub is_seeded: bool,
}

/// Wire form of the listing payload. `items` may be absent and decodes as
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct VenuePage {
    #[serde(default)]
    pub items: Vec<Venue>,
}

/// Retrieval failure. The variants exist for logs; callers treat every one
/// of them the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("invalid locator: {0}")]
    InvalidLocator(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed payload: {0}")]
    Payload(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    VenuesLoaded {
        activation: ActivationId,
        result: Result<VenuePage, FetchError>,
    },
}
