use crate::shared::i18n::Language;

/// Header state: the display language.
#[derive(Debug, Default)]
pub(crate) struct ChromeState {
    language: Language,
}

impl ChromeState {
    pub(crate) fn new(language: Language) -> Self {
        Self { language }
    }

    pub(crate) fn language(&self) -> Language {
        self.language
    }

    /// Switch language, returning whether it changed.
    pub(crate) fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        true
    }
}
