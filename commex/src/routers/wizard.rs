use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};
use crate::widgets::wizard::{WizardEffect, WizardEvent, WizardIntent};

/// Route a wizard event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: WizardEvent) -> Task<AppEvent> {
    match event {
        WizardEvent::Intent(event) => route_intent(app, event),
        WizardEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: WizardIntent) -> Task<AppEvent> {
    app.widgets.wizard.reduce(event).map(AppEvent::Wizard)
}

fn route_effect(effect: WizardEffect) -> Task<AppEvent> {
    match effect {
        WizardEffect::NavigateToList(route) => {
            Task::done(AppEvent::Navigation(NavigationEvent::Intent(
                NavigationIntent::NavigateTo(route),
            )))
        },
    }
}
