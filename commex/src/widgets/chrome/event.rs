use crate::shared::i18n::Language;

/// Intent events handled by chrome widget views.
#[derive(Debug, Clone)]
pub(crate) enum ChromeIntent {
    LogoPressed,
    SelectLanguage(Language),
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChromeEffect {
    GoHome,
}

/// Chrome event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the chrome widget.
    Intent(ChromeIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ChromeEffect),
}
