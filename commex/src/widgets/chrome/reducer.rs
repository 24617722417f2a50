use iced::Task;

use super::event::{ChromeEffect, ChromeEvent, ChromeIntent};
use super::state::ChromeState;

/// Reduce a chrome intent into state mutation and effect tasks.
pub(crate) fn reduce(
    state: &mut ChromeState,
    event: ChromeIntent,
) -> Task<ChromeEvent> {
    match apply(state, event) {
        Some(effect) => Task::done(ChromeEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(state: &mut ChromeState, event: ChromeIntent) -> Option<ChromeEffect> {
    match event {
        ChromeIntent::LogoPressed => Some(ChromeEffect::GoHome),
        ChromeIntent::SelectLanguage(language) => {
            if state.set_language(language) {
                log::debug!("language changed to {language:?}");
            }
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::Language;

    #[test]
    fn given_other_language_when_selected_then_language_switches() {
        let mut state = ChromeState::default();
        assert_eq!(state.language(), Language::PtBr);

        let effect =
            apply(&mut state, ChromeIntent::SelectLanguage(Language::EnUs));
        assert_eq!(state.language(), Language::EnUs);
        assert_eq!(effect, None);
    }

    #[test]
    fn given_current_language_when_selected_then_state_is_unchanged() {
        let mut state = ChromeState::new(Language::EnUs);
        assert!(!state.set_language(Language::EnUs));
        assert_eq!(state.language(), Language::EnUs);
    }

    #[test]
    fn given_logo_press_when_reduced_then_go_home_is_requested() {
        let mut state = ChromeState::default();
        let effect = apply(&mut state, ChromeIntent::LogoPressed);
        assert_eq!(effect, Some(ChromeEffect::GoHome));
        assert_eq!(state.language(), Language::PtBr);
    }
}
