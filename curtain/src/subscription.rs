use iced::Subscription;

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    // Escape dismisses panels, so keys only matter while one is shown.
    if app.widgets.panels.is_any_panel_shown() {
        iced::keyboard::listen().map(AppEvent::Keyboard)
    } else {
        Subscription::none()
    }
}
