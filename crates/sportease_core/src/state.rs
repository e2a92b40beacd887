use crate::fetch::{ActivationId, DepList, FetchFailure, FetchLifecycle, FetchState};
use crate::view_model::{PageViewModel, VenueCardView, FEATURED_PAGE_SIZE};

/// A bookable sports facility as displayed on the landing page. Fields are
/// passed through from the backend without validation or transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub price_per_hour: u32,
    pub is_seeded: bool,
}

/// One page of venue records from the backend listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenuePage {
    pub items: Vec<Venue>,
}

/// Hero search form fields. Presentational state; edits never trigger a
/// retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchForm {
    pub city: String,
    pub sport: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    City,
    Sport,
    Date,
}

/// Backend configuration the page is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageConfig {
    /// Base URL of the venue API. Empty means origin-relative locators.
    pub backend_url: String,
}

/// Builds the featured-venues resource locator for the given API base.
pub fn venues_locator(backend_url: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("seeded_only", "true")
        .append_pair("limit", &FEATURED_PAGE_SIZE.to_string())
        .finish();
    format!("{}/api/venues?{}", backend_url.trim_end_matches('/'), query)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: PageConfig,
    lifecycle: FetchLifecycle,
    venues: FetchState<VenuePage>,
    search: SearchForm,
    dirty: bool,
}

impl AppState {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn view(&self) -> PageViewModel {
        let venue_cards = self
            .venues
            .data()
            .map(|page| page.items.iter().map(VenueCardView::from_venue).collect())
            .unwrap_or_default();
        PageViewModel {
            loading: self.venues.loading(),
            venue_cards,
            search: self.search.clone(),
            dirty: self.dirty,
        }
    }

    /// The retrieval triple the featured-venues section consumes.
    pub fn venues(&self) -> &FetchState<VenuePage> {
        &self.venues
    }

    pub fn is_open(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub fn backend_url(&self) -> &str {
        &self.config.backend_url
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Mounts the page with a fresh retrieval triple.
    pub(crate) fn open(&mut self) {
        self.lifecycle.mount();
        self.venues = FetchState::default();
    }

    pub(crate) fn close(&mut self) {
        self.lifecycle.unmount();
    }

    /// Starts a new activation if `deps` changed. Loading flips to true here,
    /// before the caller gets the effect to dispatch.
    pub(crate) fn activate_venues(&mut self, deps: DepList) -> Option<ActivationId> {
        let activation = self.lifecycle.activate(deps)?;
        self.venues.begin();
        Some(activation)
    }

    /// Applies a settlement and reports whether state changed.
    ///
    /// Settlements are applied from whichever activation produced them; when
    /// retrievals overlap, the last one to settle owns the state. After
    /// close, settlements are dropped without effect.
    pub(crate) fn apply_settlement(
        &mut self,
        outcome: Result<VenuePage, FetchFailure>,
    ) -> bool {
        if !self.lifecycle.is_mounted() {
            return false;
        }
        match outcome {
            Ok(page) => self.venues.resolve(page),
            Err(failure) => self.venues.reject(failure),
        }
        self.venues.finish();
        true
    }

    pub(crate) fn set_search_field(&mut self, field: SearchField, value: String) {
        match field {
            SearchField::City => self.search.city = value,
            SearchField::Sport => self.search.sport = value,
            SearchField::Date => self.search.date = value,
        }
    }
}
