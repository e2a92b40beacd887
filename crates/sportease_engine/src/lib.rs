//! SportEase engine: venue retrieval IO and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{HttpVenueSource, VenueSource};
pub use types::{ActivationId, EngineEvent, FetchError, Venue, VenuePage};
