use super::model::FormField;
use crate::navigation::Route;

/// Intent events handled by the wizard widget.
#[derive(Debug, Clone)]
pub(crate) enum WizardIntent {
    /// Start the chain from its first dialog. `to_list` is the view shown
    /// once the last dialog is submitted.
    Open { to_list: Option<Route> },
    EditField { field: FormField, value: String },
    RemoveAttachment(String),
    Submit,
    /// Close the mounted dialog and abandon the chain.
    Cancel,
    /// Scheduled transition delay elapsed.
    Release { ticket: u64 },
}

/// Effect events produced by the wizard reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WizardEffect {
    NavigateToList(Route),
}

/// Wizard event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum WizardEvent {
    /// Intent event reduced by the wizard widget.
    Intent(WizardIntent),
    /// External effect orchestrated by app-level routing.
    Effect(WizardEffect),
}
