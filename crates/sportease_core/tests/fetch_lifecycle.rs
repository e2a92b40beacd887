use std::sync::Once;

use sportease_core::{
    update, AppState, Effect, FetchFailure, Msg, PageConfig, Venue, VenuePage,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

fn test_config() -> PageConfig {
    PageConfig {
        backend_url: "http://localhost:8000".to_string(),
    }
}

fn opened() -> AppState {
    let (state, _effects) = update(AppState::new(test_config()), Msg::PageOpened);
    state
}

fn sample_page(name: &str) -> VenuePage {
    VenuePage {
        items: vec![Venue {
            id: 1,
            name: name.to_string(),
            address: "X".to_string(),
            price_per_hour: 500,
            is_seeded: true,
        }],
    }
}

#[test]
fn page_open_issues_theme_and_first_retrieval() {
    init_logging();
    let (state, effects) = update(AppState::new(test_config()), Msg::PageOpened);

    assert!(state.is_open());
    assert!(state.venues().loading());
    assert_eq!(state.venues().data(), None);
    assert_eq!(state.venues().error(), None);
    assert_eq!(
        effects,
        vec![
            Effect::InitTheme,
            Effect::LoadVenues {
                activation: 1,
                locator: "http://localhost:8000/api/venues?seeded_only=true&limit=8"
                    .to_string(),
            },
        ]
    );
}

#[test]
fn deps_change_restarts_loading_in_the_same_turn() {
    init_logging();
    let state = opened();
    let (state, _effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 1,
            outcome: Ok(sample_page("Court A")),
        },
    );
    assert!(!state.venues().loading());

    let (state, effects) = update(
        state,
        Msg::VenuesRequested {
            deps: vec!["http://other:9000".to_string()],
        },
    );

    assert!(state.venues().loading());
    assert_eq!(
        effects,
        vec![Effect::LoadVenues {
            activation: 2,
            locator: "http://localhost:8000/api/venues?seeded_only=true&limit=8".to_string(),
        }]
    );
}

#[test]
fn unchanged_deps_do_not_reissue() {
    init_logging();
    let state = opened();

    let (state, effects) = update(
        state,
        Msg::VenuesRequested {
            deps: vec!["http://localhost:8000".to_string()],
        },
    );

    assert!(effects.is_empty());
    assert!(state.venues().loading());
}

#[test]
fn success_settles_with_the_payload_verbatim() {
    init_logging();
    let state = opened();
    let page = sample_page("Court A");

    let (state, effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 1,
            outcome: Ok(page.clone()),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.venues().loading());
    assert_eq!(state.venues().data(), Some(&page));
    assert_eq!(state.venues().error(), None);
}

#[test]
fn failure_keeps_the_previous_payload() {
    init_logging();
    let state = opened();
    let page = sample_page("Court A");
    let (state, _effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 1,
            outcome: Ok(page.clone()),
        },
    );

    // Retry against a changed dependency list; the old payload stays
    // visible while the retry is in flight.
    let (state, _effects) = update(
        state,
        Msg::VenuesRequested {
            deps: vec!["retry".to_string()],
        },
    );
    assert!(state.venues().loading());
    assert_eq!(state.venues().data(), Some(&page));

    let (state, _effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 2,
            outcome: Err(FetchFailure::new("connection refused")),
        },
    );

    assert!(!state.venues().loading());
    assert_eq!(
        state.venues().error(),
        Some(&FetchFailure::new("connection refused"))
    );
    assert_eq!(state.venues().data(), Some(&page));
}

#[test]
fn settlement_after_close_changes_nothing() {
    init_logging();
    let state = opened();
    let (mut state, _effects) = update(state, Msg::PageClosed);
    let _ = state.consume_dirty();
    let before = state.view();

    let (mut state, effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 1,
            outcome: Ok(sample_page("Late Court")),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
    assert!(!state.consume_dirty());
}

#[test]
fn later_settlement_wins_over_an_earlier_one() {
    init_logging();
    // Activation 1 is slow; a dependency change issues activation 2, which
    // settles first. Activation 1 settles afterwards and takes the state
    // over: last to settle wins, not last issued.
    let state = opened();
    let (state, _effects) = update(
        state,
        Msg::VenuesRequested {
            deps: vec!["fast".to_string()],
        },
    );

    let fast = sample_page("Fast Court");
    let (state, _effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 2,
            outcome: Ok(fast.clone()),
        },
    );
    assert_eq!(state.venues().data(), Some(&fast));

    let slow = sample_page("Slow Court");
    let (state, _effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 1,
            outcome: Ok(slow.clone()),
        },
    );

    assert_eq!(state.venues().data(), Some(&slow));
    assert!(!state.venues().loading());
}

#[test]
fn stale_settlement_ends_loading_for_the_newer_request() {
    init_logging();
    let state = opened();
    let (state, _effects) = update(
        state,
        Msg::VenuesRequested {
            deps: vec!["newer".to_string()],
        },
    );
    assert!(state.venues().loading());

    // Activation 1 settles while activation 2 is still in flight.
    let (state, _effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 1,
            outcome: Ok(sample_page("Old Court")),
        },
    );

    assert!(!state.venues().loading());
}

#[test]
fn reopening_starts_a_fresh_cycle() {
    init_logging();
    let state = opened();
    let (state, _effects) = update(
        state,
        Msg::VenuesSettled {
            activation: 1,
            outcome: Ok(sample_page("Court A")),
        },
    );
    let (state, _effects) = update(state, Msg::PageClosed);

    let (state, effects) = update(state, Msg::PageOpened);

    assert!(state.venues().loading());
    assert_eq!(state.venues().data(), None);
    assert_eq!(state.venues().error(), None);
    assert!(matches!(
        effects.as_slice(),
        [Effect::InitTheme, Effect::LoadVenues { activation: 2, .. }]
    ));
}
