use std::time::Duration;

use crate::config::TransitionConfig;
use crate::error::{PanelError, Result};
use crate::phase::PanelPhase;
use crate::presentation::{Presentation, present};
use crate::state::UiPanelState;
use crate::surface::{PageElements, SurfaceKind};
use crate::timer::{ScheduledTimer, TimerKind, TimerTicket, TransitionTimers};
use crate::trigger::Trigger;

/// Owner of the modal, nav drawer and backdrop visibility state.
///
/// The backdrop is never driven directly: after every operation it is
/// re-synced so that it is shown iff a panel is shown.
#[derive(Debug, Clone)]
pub struct PanelController {
    elements: PageElements,
    config: TransitionConfig,
    modal: SurfaceSlot,
    nav_drawer: SurfaceSlot,
    backdrop: SurfaceSlot,
    next_ticket: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct SurfaceSlot {
    phase: PanelPhase,
    pending: Option<PendingTimer>,
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    ticket: TimerTicket,
    kind: TimerKind,
}

impl PanelController {
    /// Wire a controller to the page described by `elements`.
    ///
    /// Fails with [`PanelError::MissingElement`] when the backdrop, the nav
    /// drawer or its toggle is absent.
    pub fn new(
        elements: PageElements,
        config: TransitionConfig,
    ) -> Result<Self> {
        if let Some(missing) = elements.first_missing_required() {
            return Err(PanelError::MissingElement {
                selector: missing.selector().unwrap_or("<unknown>"),
            });
        }

        Ok(Self {
            elements,
            config,
            modal: SurfaceSlot::default(),
            nav_drawer: SurfaceSlot::default(),
            backdrop: SurfaceSlot::default(),
            next_ticket: 0,
        })
    }

    /// Elements the controller is wired to.
    pub fn elements(&self) -> PageElements {
        self.elements
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    /// Whether the page includes a modal at all.
    pub fn has_modal(&self) -> bool {
        self.elements.contains(PageElements::MODAL)
    }

    /// Whether the page includes the modal close action.
    pub fn has_close_action(&self) -> bool {
        self.elements.contains(PageElements::CLOSE_ACTION)
    }

    pub fn phase(&self, kind: SurfaceKind) -> PanelPhase {
        self.slot(kind).phase
    }

    /// Attributes `kind` renders with in its current phase.
    pub fn presentation(&self, kind: SurfaceKind) -> Presentation {
        present(self.phase(kind), self.config.mode)
    }

    /// Ticket of the transition timer pending on `kind`, if any.
    pub fn pending_ticket(&self, kind: SurfaceKind) -> Option<TimerTicket> {
        self.slot(kind).pending.map(|pending| pending.ticket)
    }

    pub fn snapshot(&self) -> UiPanelState {
        UiPanelState {
            modal: self.modal.phase,
            nav_drawer: self.nav_drawer.phase,
            backdrop: self.backdrop.phase,
        }
    }

    /// Route a click trigger to the matching operation. Triggers whose
    /// source element is not on the page are ignored.
    pub fn handle(
        &mut self,
        trigger: Trigger,
        timers: &mut impl TransitionTimers,
    ) {
        if let Some(source) = trigger.source() {
            if !self.elements().contains(source) {
                log::debug!("{trigger:?} ignored: page has no such element");
                return;
            }
        }

        match trigger {
            Trigger::PlanSelected { plan } => {
                log::debug!("plan {plan} selected");
                self.open_modal(timers);
            },
            Trigger::CloseAction => self.close_modal(timers),
            Trigger::Backdrop => self.dismiss(timers),
            Trigger::NavToggle => self.open_nav(timers),
        }
    }

    /// Open the modal together with the backdrop.
    pub fn open_modal(&mut self, timers: &mut impl TransitionTimers) {
        if !self.has_modal() {
            log::debug!("open modal ignored: page has no modal");
            return;
        }
        self.show(SurfaceKind::Modal, timers);
        self.sync_backdrop(timers);
    }

    /// Close the modal; the backdrop follows unless the nav drawer is shown.
    pub fn close_modal(&mut self, timers: &mut impl TransitionTimers) {
        if !self.has_modal() {
            log::debug!("close modal ignored: page has no modal");
            return;
        }
        self.hide(SurfaceKind::Modal, timers);
        self.sync_backdrop(timers);
    }

    /// Open the nav drawer together with the backdrop.
    pub fn open_nav(&mut self, timers: &mut impl TransitionTimers) {
        self.show(SurfaceKind::NavDrawer, timers);
        self.sync_backdrop(timers);
    }

    /// Close the nav drawer; the backdrop follows unless the modal is shown.
    pub fn close_nav(&mut self, timers: &mut impl TransitionTimers) {
        self.hide(SurfaceKind::NavDrawer, timers);
        self.sync_backdrop(timers);
    }

    /// Close both panels, whichever is open. Backdrop clicks land here.
    pub fn dismiss(&mut self, timers: &mut impl TransitionTimers) {
        self.hide(SurfaceKind::NavDrawer, timers);
        if self.has_modal() {
            self.hide(SurfaceKind::Modal, timers);
        }
        self.sync_backdrop(timers);
    }

    /// Complete the transition identified by `ticket`.
    ///
    /// Returns `false` when the ticket is stale, i.e. the transition was
    /// cancelled or superseded by an opposing action.
    pub fn timer_elapsed(&mut self, ticket: TimerTicket) -> bool {
        let Some(kind) = SurfaceKind::ALL.into_iter().find(|kind| {
            self.slot(*kind)
                .pending
                .is_some_and(|pending| pending.ticket == ticket)
        }) else {
            log::trace!("stale transition timer {ticket} ignored");
            return false;
        };

        let slot = self.slot_mut(kind);
        let Some(pending) = slot.pending.take() else {
            return false;
        };
        slot.phase = match pending.kind {
            TimerKind::Reveal => PanelPhase::Open,
            TimerKind::Hide => PanelPhase::Closed,
        };
        log::debug!("{kind} {} after timer {ticket}", slot.phase);
        true
    }

    fn show(&mut self, kind: SurfaceKind, timers: &mut impl TransitionTimers) {
        if self.phase(kind).is_shown() {
            return;
        }
        self.cancel_pending(kind, timers);

        if self.config.mode.is_transitioned() {
            let delay = self.config.reveal_delay;
            self.begin(
                kind,
                PanelPhase::Opening,
                TimerKind::Reveal,
                delay,
                timers,
            );
        } else {
            self.slot_mut(kind).phase = PanelPhase::Open;
            log::debug!("{kind} open");
        }
    }

    fn hide(&mut self, kind: SurfaceKind, timers: &mut impl TransitionTimers) {
        if !self.phase(kind).is_shown() {
            return;
        }
        self.cancel_pending(kind, timers);

        if self.config.mode.is_transitioned() {
            let delay = self.config.hide_delay;
            self.begin(
                kind,
                PanelPhase::Closing,
                TimerKind::Hide,
                delay,
                timers,
            );
        } else {
            self.slot_mut(kind).phase = PanelPhase::Closed;
            log::debug!("{kind} closed");
        }
    }

    fn begin(
        &mut self,
        kind: SurfaceKind,
        phase: PanelPhase,
        timer_kind: TimerKind,
        delay: Duration,
        timers: &mut impl TransitionTimers,
    ) {
        let ticket = self.issue_ticket();
        let slot = self.slot_mut(kind);
        slot.phase = phase;
        slot.pending = Some(PendingTimer {
            ticket,
            kind: timer_kind,
        });
        log::debug!("{kind} {phase}, timer {ticket} in {delay:?}");

        timers.schedule(ScheduledTimer {
            ticket,
            surface: kind,
            kind: timer_kind,
            delay,
        });
    }

    fn cancel_pending(
        &mut self,
        kind: SurfaceKind,
        timers: &mut impl TransitionTimers,
    ) {
        if let Some(pending) = self.slot_mut(kind).pending.take() {
            log::trace!("{kind} timer {} cancelled", pending.ticket);
            timers.cancel(pending.ticket);
        }
    }

    fn sync_backdrop(&mut self, timers: &mut impl TransitionTimers) {
        let wanted =
            self.modal.phase.is_shown() || self.nav_drawer.phase.is_shown();
        if wanted {
            self.show(SurfaceKind::Backdrop, timers);
        } else {
            self.hide(SurfaceKind::Backdrop, timers);
        }
    }

    fn issue_ticket(&mut self) -> TimerTicket {
        self.next_ticket += 1;
        TimerTicket::new(self.next_ticket)
    }

    fn slot(&self, kind: SurfaceKind) -> &SurfaceSlot {
        match kind {
            SurfaceKind::Modal => &self.modal,
            SurfaceKind::NavDrawer => &self.nav_drawer,
            SurfaceKind::Backdrop => &self.backdrop,
        }
    }

    fn slot_mut(&mut self, kind: SurfaceKind) -> &mut SurfaceSlot {
        match kind {
            SurfaceKind::Modal => &mut self.modal,
            SurfaceKind::NavDrawer => &mut self.nav_drawer,
            SurfaceKind::Backdrop => &mut self.backdrop,
        }
    }
}
