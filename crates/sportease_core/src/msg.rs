use crate::fetch::{ActivationId, DepList, FetchFailure};
use crate::state::{SearchField, VenuePage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The page became visible; installs the theme and issues the first
    /// retrieval. Reopening an already-open page is ignored.
    PageOpened,
    /// Re-issue the venue retrieval when `deps` differs from the previous
    /// activation's list.
    VenuesRequested { deps: DepList },
    /// A retrieval settled. `activation` names the issuing cycle for logs;
    /// the settlement is applied regardless of staleness.
    VenuesSettled {
        activation: ActivationId,
        outcome: Result<VenuePage, FetchFailure>,
    },
    /// User edited one of the hero search inputs.
    SearchFieldChanged { field: SearchField, value: String },
    /// User clicked Search. The button is presentational only.
    SearchSubmitted,
    /// The page was torn down; later settlements are dropped.
    PageClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}
