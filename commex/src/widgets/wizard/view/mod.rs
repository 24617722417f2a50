pub(crate) mod dialog;
