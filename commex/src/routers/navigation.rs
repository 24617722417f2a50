use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};
use crate::widgets::pages::PagesIntent;
use crate::widgets::wizard::{WizardEvent, WizardIntent};

/// Route a navigation event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(event) => route_intent(app, event),
        NavigationEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: NavigationIntent) -> Task<AppEvent> {
    app.widgets
        .navigation
        .reduce(event)
        .map(AppEvent::Navigation)
}

fn route_effect(app: &mut App, effect: NavigationEffect) -> Task<AppEvent> {
    match effect {
        NavigationEffect::ActiveChanged { .. } => {
            let screen = app.widgets.navigation.screen();
            let mut tasks = vec![
                app.widgets
                    .pages
                    .reduce(PagesIntent::ScreenChanged(screen))
                    .map(AppEvent::Pages),
            ];
            if app.widgets.wizard.is_active() {
                tasks.push(Task::done(AppEvent::Wizard(WizardEvent::Intent(
                    WizardIntent::Cancel,
                ))));
            }
            Task::batch(tasks)
        },
    }
}
