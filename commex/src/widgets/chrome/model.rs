use crate::shared::i18n::Language;

/// View model for the chrome widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel {
    pub(crate) language: Language,
}
