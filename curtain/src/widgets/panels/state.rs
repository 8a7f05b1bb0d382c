use std::collections::HashMap;

use curtain_surface::{PanelController, SurfaceKind, TimerTicket};
use iced::task;

/// Panel controller plus the runtime handles of its in-flight timers.
pub(crate) struct PanelsState {
    controller: PanelController,
    timers: HashMap<TimerTicket, task::Handle>,
}

impl PanelsState {
    pub(crate) fn new(controller: PanelController) -> Self {
        Self {
            controller,
            timers: HashMap::new(),
        }
    }

    pub(crate) fn controller(&self) -> &PanelController {
        &self.controller
    }

    pub(crate) fn controller_mut(&mut self) -> &mut PanelController {
        &mut self.controller
    }

    /// Return whether the modal is opening or open.
    pub(crate) fn is_modal_shown(&self) -> bool {
        self.controller.phase(SurfaceKind::Modal).is_shown()
    }

    /// Return whether any panel, and therefore the backdrop, is shown.
    pub(crate) fn is_any_panel_shown(&self) -> bool {
        self.controller.snapshot().any_panel_shown()
    }

    /// Remember the abort handle of a freshly spawned timer task.
    pub(crate) fn track_timer(
        &mut self,
        ticket: TimerTicket,
        handle: task::Handle,
    ) {
        self.timers.insert(ticket, handle);
    }

    /// Abort a timer task; unknown tickets are ignored.
    pub(crate) fn cancel_timer(&mut self, ticket: TimerTicket) {
        if let Some(handle) = self.timers.remove(&ticket) {
            handle.abort();
        }
    }

    /// Forget a timer whose task already completed.
    pub(crate) fn finish_timer(&mut self, ticket: TimerTicket) {
        self.timers.remove(&ticket);
    }

    #[cfg(test)]
    pub(crate) fn in_flight_timers(&self) -> usize {
        self.timers.len()
    }
}
