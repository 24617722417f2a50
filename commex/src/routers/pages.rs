use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{NavigationEvent, NavigationIntent};
use crate::widgets::pages::{PagesEffect, PagesEvent, PagesIntent};
use crate::widgets::wizard::{WizardEvent, WizardIntent};

/// Route a pages event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: PagesEvent) -> Task<AppEvent> {
    match event {
        PagesEvent::Intent(event) => route_intent(app, event),
        PagesEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: PagesIntent) -> Task<AppEvent> {
    app.widgets.pages.reduce(event).map(AppEvent::Pages)
}

fn route_effect(effect: PagesEffect) -> Task<AppEvent> {
    match effect {
        PagesEffect::NavigateTo(route) => Task::done(AppEvent::Navigation(
            NavigationEvent::Intent(NavigationIntent::NavigateTo(route)),
        )),
        PagesEffect::OpenWizard { to_list } => Task::done(AppEvent::Wizard(
            WizardEvent::Intent(WizardIntent::Open { to_list }),
        )),
    }
}
