use crate::state::venues_locator;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageOpened => {
            if state.is_open() {
                return (state, Vec::new());
            }
            state.open();
            state.mark_dirty();
            let mut effects = vec![Effect::InitTheme];
            let deps = vec![state.backend_url().to_owned()];
            if let Some(activation) = state.activate_venues(deps) {
                effects.push(Effect::LoadVenues {
                    activation,
                    locator: venues_locator(state.backend_url()),
                });
            }
            effects
        }
        Msg::VenuesRequested { deps } => match state.activate_venues(deps) {
            Some(activation) => {
                state.mark_dirty();
                vec![Effect::LoadVenues {
                    activation,
                    locator: venues_locator(state.backend_url()),
                }]
            }
            None => Vec::new(),
        },
        Msg::VenuesSettled {
            activation: _,
            outcome,
        } => {
            if state.apply_settlement(outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchFieldChanged { field, value } => {
            state.set_search_field(field, value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted => Vec::new(),
        Msg::PageClosed => {
            state.close();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
