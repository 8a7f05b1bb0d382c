use iced::Task;
use iced::keyboard::{self, key};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Page(event) => routers::page::route(app, event),
        AppEvent::Panels(event) => routers::panels::route(app, event),
        AppEvent::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => routers::panels::dismiss(app),
        AppEvent::Keyboard(_) => Task::none(),
    }
}
