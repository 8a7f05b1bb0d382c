use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::controller::PanelController;
use crate::timer::{ScheduledTimer, TimerTicket, TransitionTimers};

/// Deterministic timer host driven by virtual time.
///
/// Timers fire in due order (ticket order for equal due times) when the
/// clock is advanced. Useful for headless drivers and tests.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    queue: BTreeMap<(Duration, TimerTicket), ScheduledTimer>,
    due: HashMap<TimerTicket, Duration>,
    ignore_cancel: bool,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose timers cannot be aborted once scheduled, so every
    /// callback fires eventually.
    pub fn without_cancellation() -> Self {
        Self {
            ignore_cancel: true,
            ..Self::default()
        }
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Advance the clock by `by`, firing every timer due on the way. The
    /// clock saturates at `Duration::MAX`.
    ///
    /// Returns how many fired timers completed a transition; stale ones are
    /// delivered but do not count.
    pub fn advance(
        &mut self,
        by: Duration,
        controller: &mut PanelController,
    ) -> usize {
        let target = self.now.saturating_add(by);
        let mut applied = 0;

        while let Some(ticket) = self.pop_due(target) {
            if controller.timer_elapsed(ticket) {
                applied += 1;
            }
        }

        self.now = target;
        applied
    }

    /// Fire timers until none are left.
    pub fn settle(&mut self, controller: &mut PanelController) -> usize {
        let mut applied = 0;
        while let Some(&(due, _)) = self.queue.keys().next() {
            let by = due.saturating_sub(self.now);
            applied += self.advance(by, controller);
        }
        applied
    }

    fn pop_due(&mut self, target: Duration) -> Option<TimerTicket> {
        let (&(due, ticket), _) = self.queue.first_key_value()?;
        if due > target {
            return None;
        }
        self.queue.remove(&(due, ticket));
        self.due.remove(&ticket);
        self.now = due;
        Some(ticket)
    }
}

impl TransitionTimers for VirtualTimers {
    fn schedule(&mut self, timer: ScheduledTimer) {
        let due = self.now.saturating_add(timer.delay);
        self.queue.insert((due, timer.ticket), timer);
        self.due.insert(timer.ticket, due);
    }

    fn cancel(&mut self, ticket: TimerTicket) {
        if self.ignore_cancel {
            return;
        }
        if let Some(due) = self.due.remove(&ticket) {
            self.queue.remove(&(due, ticket));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::VirtualTimers;
    use crate::config::TransitionConfig;
    use crate::controller::PanelController;
    use crate::phase::PanelPhase;
    use crate::surface::{PageElements, SurfaceKind};

    fn controller() -> PanelController {
        PanelController::new(PageElements::all(), TransitionConfig::default())
            .expect("full page should wire")
    }

    #[test]
    fn given_cancelled_timer_when_clock_advances_then_it_never_fires() {
        let mut controller = controller();
        let mut timers = VirtualTimers::new();
        controller.open_modal(&mut timers);
        controller.close_modal(&mut timers);

        let applied = timers.advance(Duration::from_millis(10), &mut controller);

        assert_eq!(applied, 0);
        assert_eq!(controller.phase(SurfaceKind::Modal), PanelPhase::Closing);
        assert_eq!(timers.pending(), 2);
    }

    #[test]
    fn given_pending_timers_when_settled_then_clock_stops_at_last_due_time() {
        let mut controller = controller();
        let mut timers = VirtualTimers::new();
        controller.open_nav(&mut timers);
        timers.settle(&mut controller);
        controller.dismiss(&mut timers);

        let applied = timers.settle(&mut controller);

        assert_eq!(applied, 2);
        assert_eq!(timers.now(), Duration::from_millis(210));
        assert_eq!(timers.pending(), 0);
        assert!(controller.snapshot().is_settled());
    }

    #[test]
    fn given_host_without_cancellation_when_stale_hide_fires_then_reopened_modal_stays()
     {
        let mut controller = controller();
        let mut timers = VirtualTimers::without_cancellation();
        controller.open_modal(&mut timers);
        timers.settle(&mut controller);
        controller.close_modal(&mut timers);
        timers.advance(Duration::from_millis(50), &mut controller);
        controller.open_modal(&mut timers);

        timers.settle(&mut controller);

        assert_eq!(controller.phase(SurfaceKind::Modal), PanelPhase::Open);
        assert_eq!(controller.phase(SurfaceKind::Backdrop), PanelPhase::Open);
    }

    #[test]
    fn given_unbounded_hide_delay_when_modal_closes_then_clock_saturates() {
        let config = TransitionConfig::default()
            .with_delays(Duration::from_millis(10), Duration::MAX);
        let mut controller = PanelController::new(PageElements::all(), config)
            .expect("full page should wire");
        let mut timers = VirtualTimers::new();
        controller.open_modal(&mut timers);
        timers.advance(Duration::from_millis(10), &mut controller);

        controller.close_modal(&mut timers);
        timers.advance(Duration::from_secs(3600), &mut controller);
        assert_eq!(controller.phase(SurfaceKind::Modal), PanelPhase::Closing);

        let applied = timers.settle(&mut controller);

        assert_eq!(applied, 2);
        assert_eq!(timers.now(), Duration::MAX);
        assert_eq!(controller.phase(SurfaceKind::Modal), PanelPhase::Closed);
        assert_eq!(controller.phase(SurfaceKind::Backdrop), PanelPhase::Closed);
    }
}
