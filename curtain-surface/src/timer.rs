use std::fmt;
use std::time::Duration;

use crate::surface::SurfaceKind;

/// Identifier of one scheduled transition callback.
///
/// Tickets are issued by the controller in increasing order and never
/// reused, so a ticket that is no longer pending can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerTicket(u64);

impl TimerTicket {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TimerTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transition a timer completes when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Opening → Open: apply the `open` class.
    Reveal,
    /// Closing → Closed: drop `display: block`.
    Hide,
}

/// A transition callback the host must run after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledTimer {
    pub ticket: TimerTicket,
    pub surface: SurfaceKind,
    pub kind: TimerKind,
    pub delay: Duration,
}

/// Interface for running deferred transition callbacks.
///
/// Implementations report a fired timer back through
/// [`crate::PanelController::timer_elapsed`]. Cancellation is best effort:
/// the controller ignores tickets that are no longer pending, so hosts
/// without abortable timers stay correct.
pub trait TransitionTimers {
    /// Run the callback identified by `timer.ticket` after `timer.delay`.
    fn schedule(&mut self, timer: ScheduledTimer);
    /// Drop a previously scheduled callback.
    fn cancel(&mut self, ticket: TimerTicket);
}

/// One request recorded by [`TimerRequests`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    Schedule(ScheduledTimer),
    Cancel(TimerTicket),
}

/// Timer host that records requests so callers can apply them later, e.g.
/// by turning them into runtime tasks.
#[derive(Debug, Default)]
pub struct TimerRequests {
    requests: Vec<TimerRequest>,
}

impl TimerRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn as_slice(&self) -> &[TimerRequest] {
        &self.requests
    }
}

impl TransitionTimers for TimerRequests {
    fn schedule(&mut self, timer: ScheduledTimer) {
        self.requests.push(TimerRequest::Schedule(timer));
    }

    fn cancel(&mut self, ticket: TimerTicket) {
        self.requests.push(TimerRequest::Cancel(ticket));
    }
}

impl IntoIterator for TimerRequests {
    type Item = TimerRequest;
    type IntoIter = std::vec::IntoIter<TimerRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{
        ScheduledTimer, TimerKind, TimerRequest, TimerRequests, TimerTicket,
        TransitionTimers,
    };
    use crate::surface::SurfaceKind;

    #[test]
    fn given_schedule_and_cancel_when_recorded_then_requests_keep_call_order() {
        let mut requests = TimerRequests::new();
        let timer = ScheduledTimer {
            ticket: TimerTicket::new(1),
            surface: SurfaceKind::Modal,
            kind: TimerKind::Reveal,
            delay: Duration::from_millis(10),
        };

        requests.schedule(timer);
        requests.cancel(TimerTicket::new(1));

        assert_eq!(
            requests.as_slice(),
            &[
                TimerRequest::Schedule(timer),
                TimerRequest::Cancel(TimerTicket::new(1))
            ]
        );
    }

    #[test]
    fn given_ticket_when_formatted_then_hash_prefixed_number_is_printed() {
        assert_eq!(TimerTicket::new(7).to_string(), "#7");
    }
}
