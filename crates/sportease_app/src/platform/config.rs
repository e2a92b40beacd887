//! Environment configuration, read once at startup.

use sportease_core::PageConfig;

const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Reads the backend base URL from the environment. Unset or empty means
/// origin-relative locators, like a page served next to its API.
pub(crate) fn from_env() -> PageConfig {
    PageConfig {
        backend_url: std::env::var(BACKEND_URL_VAR).unwrap_or_default(),
    }
}
