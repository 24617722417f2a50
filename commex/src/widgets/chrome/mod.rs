mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ChromeEffect, ChromeEvent, ChromeIntent};
pub(crate) use self::model::ChromeViewModel;
use self::state::ChromeState;
use crate::shared::i18n::Language;

/// Chrome widget managing the dashboard header.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    /// Create the chrome widget with the configured language.
    pub(crate) fn new(language: Language) -> Self {
        Self {
            state: ChromeState::new(language),
        }
    }

    /// Reduce a chrome intent event into state updates and effects.
    pub(crate) fn reduce(&mut self, event: ChromeIntent) -> Task<ChromeEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            language: self.state.language(),
        }
    }

    /// Return the active display language.
    pub(crate) fn language(&self) -> Language {
        self.state.language()
    }
}
