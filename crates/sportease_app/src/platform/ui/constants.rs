//! Shared page copy. Markup lives in `layout` and `render`; the words live
//! here.

pub(crate) const NAV_LINKS: &[(&str, &str)] = &[
    ("#venues", "Venues"),
    ("#pricing", "Pricing"),
    ("#faq", "FAQ"),
];
pub(crate) const NAV_CTA: &str = "List your venue";

pub(crate) const HERO_TITLE: &str = "Book sports venues instantly";
pub(crate) const HERO_SUBTITLE: &str =
    "Search, compare and book turfs and courts across Vadodara.";
pub(crate) const SEARCH_CITY_PLACEHOLDER: &str = "City";
pub(crate) const SEARCH_SPORT_PLACEHOLDER: &str = "Sport";
pub(crate) const SEARCH_BUTTON: &str = "Search";

pub(crate) const VENUES_HEADING: &str = "Featured venues";
pub(crate) const VENUES_SEE_ALL: &str = "See all";
pub(crate) const BADGE_FOUNDING_PARTNER: &str = "Founding Partner";
pub(crate) const CARD_VIEW_BUTTON: &str = "View";
pub(crate) const EMPTY_GRID_NOTE: &str = "No venues to show yet.";

pub(crate) const FOOTER_NOTE: &str = "Built for demo.";
