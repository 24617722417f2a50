//! Navigation core: view identifiers, the static view registry and the
//! screens it resolves to. Free of UI types so it can be tested directly.

mod registry;
mod route;
mod screen;

pub(crate) use registry::{MENU, MenuEntry, MenuIcon, entry, resolve};
pub(crate) use route::Route;
pub(crate) use screen::Screen;
