use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::NavigationState;
use crate::navigation::{self, Route};

/// Reduce a navigation intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut NavigationState,
    event: NavigationIntent,
) -> Task<NavigationEvent> {
    match apply(state, event) {
        Some(effect) => Task::done(NavigationEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(
    state: &mut NavigationState,
    event: NavigationIntent,
) -> Option<NavigationEffect> {
    match event {
        NavigationIntent::SelectEntry(route) => {
            let has_children = navigation::entry(route)
                .map(|entry| entry.has_children())
                .unwrap_or(false);
            if has_children {
                state.toggle_group(route);
            }
            navigate(state, route)
        },
        NavigationIntent::SelectChild { parent, child } => {
            let is_child = navigation::entry(parent)
                .and_then(|entry| entry.child(child))
                .is_some();
            if !is_child {
                log::debug!("ignoring {child}: not a child of {parent}");
                return None;
            }
            navigate(state, child)
        },
        NavigationIntent::ToggleGroup(route) => {
            state.toggle_group(route);
            None
        },
        NavigationIntent::ToggleSidebar => {
            state.toggle_sidebar();
            None
        },
        NavigationIntent::NavigateTo(route) => navigate(state, route),
        NavigationIntent::GoHome => navigate(state, Route::DEFAULT),
    }
}

fn navigate(
    state: &mut NavigationState,
    route: Route,
) -> Option<NavigationEffect> {
    let from = state.navigate_to(route)?;
    log::debug!("active view changed: {from} -> {route}");
    Some(NavigationEffect::ActiveChanged { from, to: route })
}
