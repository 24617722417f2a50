pub(crate) mod i18n;
pub(crate) mod icons;
pub(crate) mod list;
pub(crate) mod style;
pub(crate) mod theme;
