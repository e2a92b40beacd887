//! Renders the page view model into a complete HTML document.

use sportease_core::{PageViewModel, SearchForm, VenueCardView};

use super::constants::{
    BADGE_FOUNDING_PARTNER, CARD_VIEW_BUTTON, EMPTY_GRID_NOTE, HERO_SUBTITLE, HERO_TITLE,
    SEARCH_BUTTON, SEARCH_CITY_PLACEHOLDER, SEARCH_SPORT_PLACEHOLDER, VENUES_HEADING,
    VENUES_SEE_ALL,
};
use super::layout;

pub(crate) fn render(view: &PageViewModel) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    out.push_str(&layout::document_head());
    out.push_str("<body>\n");
    out.push_str(&layout::header());
    out.push_str(&hero(&view.search));
    out.push_str(&venues_section(view));
    out.push_str(&layout::footer());
    out.push_str("</body>\n</html>\n");
    out
}

fn hero(search: &SearchForm) -> String {
    format!(
        "<section class=\"hero\">\n\
         <div class=\"container hero-panel\">\n\
         <h1>{HERO_TITLE}</h1>\n\
         <p>{HERO_SUBTITLE}</p>\n\
         <div class=\"search-row\">\n\
         <input placeholder=\"{SEARCH_CITY_PLACEHOLDER}\" value=\"{city}\">\n\
         <input placeholder=\"{SEARCH_SPORT_PLACEHOLDER}\" value=\"{sport}\">\n\
         <input type=\"date\" value=\"{date}\">\n\
         <button class=\"btn-primary\">{SEARCH_BUTTON}</button>\n\
         </div>\n\
         </div>\n\
         </section>\n",
        city = escape_text(&search.city),
        sport = escape_text(&search.sport),
        date = escape_text(&search.date),
    )
}

fn venues_section(view: &PageViewModel) -> String {
    let mut section = format!(
        "<section id=\"venues\" class=\"container\">\n\
         <div class=\"section-head\">\n\
         <h2>{VENUES_HEADING}</h2>\n\
         <a class=\"see-all\" href=\"#\">{VENUES_SEE_ALL}</a>\n\
         </div>\n\
         <div class=\"venue-grid\">\n"
    );
    for card in &view.venue_cards {
        section.push_str(&venue_card(card));
    }
    section.push_str("</div>\n");
    if !view.loading && view.venue_cards.is_empty() {
        // Failures and empty listings look the same: a quiet note, never an
        // error banner.
        section.push_str(&format!("<p class=\"empty-note\">{EMPTY_GRID_NOTE}</p>\n"));
    }
    section.push_str("</section>\n");
    section
}

fn venue_card(card: &VenueCardView) -> String {
    let badge = if card.founding_partner {
        format!("<span class=\"badge\">{BADGE_FOUNDING_PARTNER}</span>")
    } else {
        String::new()
    };
    format!(
        "<article class=\"venue-card\" data-venue-id=\"{id}\">\n\
         <div class=\"venue-photo\"></div>\n\
         <div class=\"venue-body\">\n\
         <div class=\"venue-badges\">{badge}</div>\n\
         <h3>{name}</h3>\n\
         <p class=\"venue-address\">{address}</p>\n\
         <div class=\"venue-meta\">\n\
         <span>{price}</span>\n\
         <button class=\"btn-primary\">{CARD_VIEW_BUTTON}</button>\n\
         </div>\n\
         </div>\n\
         </article>\n",
        id = card.id,
        name = escape_text(&card.name),
        address = escape_text(&card.address),
        price = escape_text(&card.price_label),
    )
}

/// Minimal HTML escape for text interpolated into markup.
fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
