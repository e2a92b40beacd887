//! SportEase core: pure page state machine and view-model helpers.
mod brand;
mod effect;
mod fetch;
mod msg;
mod state;
mod update;
mod view_model;

pub use brand::{Brand, BRAND};
pub use effect::Effect;
pub use fetch::{ActivationId, DepList, FetchFailure, FetchLifecycle, FetchState};
pub use msg::Msg;
pub use state::{
    venues_locator, AppState, PageConfig, SearchField, SearchForm, Venue, VenuePage,
};
pub use update::update;
pub use view_model::{PageViewModel, VenueCardView, FEATURED_PAGE_SIZE};
