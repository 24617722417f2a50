mod calendar;
mod consigned;
mod event;
mod model;
mod reducer;
mod sheet;
mod state;
pub(crate) mod view;

pub(crate) use event::{PagesEffect, PagesEvent, PagesIntent};
use iced::Task;
pub(crate) use model::PagesViewModel;
use state::PagesState;

use crate::navigation::Screen;

/// Pages widget: body of the active screen and its local state.
pub(crate) struct PagesWidget {
    state: PagesState,
}

impl PagesWidget {
    /// Construct the widget with `screen` mounted.
    pub(crate) fn new(screen: Screen) -> Self {
        Self {
            state: PagesState::new(screen),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: PagesIntent) -> Task<PagesEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> PagesViewModel<'_> {
        PagesViewModel {
            screen: self.state.screen(),
            tab: self.state.tab(),
            body: self.state.body(),
            note: self.state.note(),
            idgen: self.state.idgen(),
            attachments: self.state.attachments(),
            room_tab: self.state.room_tab(),
        }
    }
}
