mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use curtain_surface::{PanelController, SurfaceKind};
pub(crate) use event::{PanelsEffect, PanelsEvent, PanelsIntent};
use iced::Task;
pub(crate) use model::PanelsViewModel;
use state::PanelsState;

/// Widget owning the modal, the nav drawer and their shared backdrop.
pub(crate) struct PanelsWidget {
    state: PanelsState,
}

impl PanelsWidget {
    /// Wrap an already wired panel controller.
    pub(crate) fn new(controller: PanelController) -> Self {
        Self {
            state: PanelsState::new(controller),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, intent: PanelsIntent) -> Task<PanelsEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> PanelsViewModel {
        let controller = self.state.controller();
        PanelsViewModel {
            modal: controller.presentation(SurfaceKind::Modal),
            nav_drawer: controller.presentation(SurfaceKind::NavDrawer),
            backdrop: controller.presentation(SurfaceKind::Backdrop),
            has_close_action: controller.has_close_action(),
        }
    }

    /// Return whether the backdrop is up because a panel is shown.
    pub(crate) fn is_any_panel_shown(&self) -> bool {
        self.state.is_any_panel_shown()
    }
}
