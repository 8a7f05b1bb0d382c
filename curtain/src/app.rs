#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use curtain_surface::PanelController;
use iced::{Element, Subscription, Task, Theme};

use crate::settings::SettingsData;
use crate::widgets::Widgets;
use crate::widgets::page::{PageEvent, PageWidget};
use crate::widgets::panels::{PanelsEvent, PanelsWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Page widget
    Page(PageEvent),
    // Panels widget
    Panels(PanelsEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application from loaded settings and a wired
    /// controller.
    pub(crate) fn new(
        settings: SettingsData,
        controller: PanelController,
    ) -> (Self, Task<AppEvent>) {
        let widgets = Widgets {
            page: PageWidget::new(
                settings.plans().to_vec(),
                settings.nav_links().to_vec(),
            ),
            panels: PanelsWidget::new(controller),
        };

        (App { widgets }, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        match self.widgets.page.confirmed_title() {
            Some(plan) => format!("curtain hosting: {plan}"),
            None => String::from("curtain hosting"),
        }
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
