//! Process-wide presentation theme.
//!
//! Installed once at startup from the brand constants and read-only
//! afterwards; pure presentation state, so there is no teardown.

use std::sync::OnceLock;

use sportease_core::BRAND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
    pub brand_color: &'static str,
    pub accent_color: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn brand_theme() -> Theme {
    Theme {
        brand_color: BRAND.primary,
        accent_color: BRAND.accent,
        heading_font: BRAND.heading_font,
        body_font: BRAND.body_font,
    }
}

/// Installs the brand theme. Later calls are no-ops.
pub(crate) fn init() {
    let _ = THEME.set(brand_theme());
}

/// The installed theme. Falls back to the brand defaults when rendering
/// happens before installation.
pub(crate) fn current() -> Theme {
    *THEME.get_or_init(brand_theme)
}
