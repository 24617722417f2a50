use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Navigation(event) => routers::navigation::route(app, event),
        AppEvent::Chrome(event) => routers::chrome::route(app, event),
        AppEvent::Pages(event) => routers::pages::route(app, event),
        AppEvent::Wizard(event) => routers::wizard::route(app, event),
    }
}
