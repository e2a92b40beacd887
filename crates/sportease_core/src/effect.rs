use crate::fetch::ActivationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    InitTheme,
    LoadVenues {
        activation: ActivationId,
        locator: String,
    },
}
