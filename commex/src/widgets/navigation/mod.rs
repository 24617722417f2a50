mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{NavigationEffect, NavigationEvent, NavigationIntent};
use iced::Task;
pub(crate) use model::NavigationViewModel;
use state::NavigationState;

use crate::navigation::{self, Route, Screen};

/// Navigation widget: the single writer of the active view.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    /// Construct navigation state mounted on `initial`.
    pub(crate) fn new(initial: Route, sidebar_expanded: bool) -> Self {
        Self {
            state: NavigationState::new(initial, sidebar_expanded),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> NavigationViewModel<'_> {
        NavigationViewModel {
            active: self.state.active(),
            sidebar_expanded: self.state.is_sidebar_expanded(),
            expanded_groups: self.state.expanded_groups(),
        }
    }

    /// Return the active route.
    pub(crate) fn active(&self) -> Route {
        self.state.active()
    }

    /// Resolve the active route to the screen to render.
    pub(crate) fn screen(&self) -> Screen {
        navigation::resolve(self.state.active())
    }
}
