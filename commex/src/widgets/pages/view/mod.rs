mod actions;
mod calendar;
mod consigned;
mod detail;
mod fields;
mod form;
pub(crate) mod page;
mod room_sheet;
mod sheet;
mod table;
mod tasks;
