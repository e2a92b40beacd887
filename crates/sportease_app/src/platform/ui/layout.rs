//! Static page chrome: the fragments that render the same regardless of
//! state.

use chrono::Datelike;
use sportease_core::BRAND;

use super::constants::{FOOTER_NOTE, NAV_CTA, NAV_LINKS};
use crate::platform::theme;

pub(crate) fn document_head() -> String {
    let theme = theme::current();
    format!(
        "<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{name}</title>\n\
         <style>\n\
         :root {{ --brand: {brand}; --accent: {accent}; }}\n\
         body {{ margin: 0; font-family: '{body}', sans-serif; color: {secondary}; background: #fafafa; }}\n\
         h1, h2, h3 {{ font-family: '{heading}', sans-serif; }}\n\
         .container {{ max-width: 72rem; margin: 0 auto; padding: 0 1rem; }}\n\
         .site-header {{ position: sticky; top: 0; background: rgba(255, 255, 255, 0.7); border-bottom: 1px solid rgba(0, 0, 0, 0.05); }}\n\
         .header-row {{ display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1rem; }}\n\
         .brand-mark {{ display: inline-block; width: 2.25rem; height: 2.25rem; border-radius: 0.75rem; background: var(--brand); }}\n\
         .brand-name {{ font-weight: 600; margin-left: 0.75rem; }}\n\
         nav a {{ margin-right: 1rem; font-size: 0.875rem; color: inherit; }}\n\
         .btn-primary {{ background: var(--brand); color: #fff; border: 0; border-radius: 0.75rem; padding: 0.5rem 0.75rem; }}\n\
         .hero-panel {{ padding: 4rem 1rem; }}\n\
         .search-row {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; }}\n\
         .search-row input {{ padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 0.75rem; }}\n\
         .section-head {{ display: flex; align-items: flex-end; justify-content: space-between; margin-bottom: 1.5rem; }}\n\
         .see-all {{ color: var(--accent); font-size: 0.875rem; }}\n\
         .venue-grid {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.25rem; }}\n\
         .venue-card {{ background: #fff; border-radius: 1rem; overflow: hidden; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08); }}\n\
         .venue-photo {{ height: 8rem; background: linear-gradient(135deg, #a7f3d0, #34d399); }}\n\
         .venue-body {{ padding: 1rem; }}\n\
         .venue-address {{ color: #6b7280; font-size: 0.875rem; }}\n\
         .venue-meta {{ display: flex; align-items: center; justify-content: space-between; font-size: 0.875rem; }}\n\
         .badge {{ background: #d1fae5; color: #047857; border-radius: 9999px; padding: 0.1rem 0.5rem; font-size: 0.65rem; }}\n\
         .empty-note {{ color: #6b7280; }}\n\
         .site-footer {{ margin-top: 5rem; border-top: 1px solid #e5e7eb; padding: 2.5rem 0; color: #6b7280; font-size: 0.875rem; }}\n\
         </style>\n\
         </head>\n",
        name = BRAND.name,
        brand = theme.brand_color,
        accent = theme.accent_color,
        heading = theme.heading_font,
        body = theme.body_font,
        secondary = BRAND.secondary,
    )
}

pub(crate) fn header() -> String {
    let mut nav = String::new();
    for (href, label) in NAV_LINKS {
        nav.push_str(&format!("<a href=\"{href}\">{label}</a>\n"));
    }
    format!(
        "<header class=\"site-header\">\n\
         <div class=\"container header-row\">\n\
         <div class=\"brand\"><span class=\"brand-mark\"></span><span class=\"brand-name\">{name}</span></div>\n\
         <nav>\n{nav}<button class=\"btn-primary\">{NAV_CTA}</button>\n</nav>\n\
         </div>\n\
         </header>\n",
        name = BRAND.name,
    )
}

pub(crate) fn footer() -> String {
    let year = chrono::Local::now().year();
    format!(
        "<footer class=\"site-footer\">\n\
         <div class=\"container\">© {year} {name}. {FOOTER_NOTE}</div>\n\
         </footer>\n",
        name = BRAND.name,
    )
}
