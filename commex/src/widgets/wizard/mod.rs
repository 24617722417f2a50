mod chain;
mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Duration;

use chain::WizardPhase;
pub(crate) use event::{WizardEffect, WizardEvent, WizardIntent};
use iced::Task;
pub(crate) use model::WizardViewModel;
use state::WizardState;

/// Wizard widget: the procedure creation dialog chain.
pub(crate) struct WizardWidget {
    state: WizardState,
    transition: Duration,
}

impl WizardWidget {
    /// Construct a closed wizard whose dialogs swap after `transition`.
    pub(crate) fn new(transition: Duration) -> Self {
        Self {
            state: WizardState::default(),
            transition,
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: WizardIntent) -> Task<WizardEvent> {
        reducer::reduce(&mut self.state, event, self.transition)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> WizardViewModel<'_> {
        WizardViewModel {
            visible: self.state.visible_form(),
        }
    }

    /// Return whether a dialog is mounted or a transition is pending.
    pub(crate) fn is_active(&self) -> bool {
        self.state.chain().phase() != WizardPhase::Closed
            || self.state.has_pending()
    }
}
