use curtain_surface::{ScheduledTimer, TimerRequest, TimerRequests};
use iced::Task;

use super::event::{PanelsEffect, PanelsEvent, PanelsIntent};
use super::state::PanelsState;

/// Reduce a panels intent into controller updates, timer tasks and effects.
pub(crate) fn reduce(
    state: &mut PanelsState,
    intent: PanelsIntent,
) -> Task<PanelsEvent> {
    match intent {
        PanelsIntent::Trigger(trigger) => {
            let modal_was_shown = state.is_modal_shown();
            let mut requests = TimerRequests::new();
            state.controller_mut().handle(trigger, &mut requests);
            let timers = apply_timer_requests(state, requests);

            if modal_was_shown && !state.is_modal_shown() {
                Task::batch([
                    timers,
                    Task::done(PanelsEvent::Effect(
                        PanelsEffect::ModalDismissed,
                    )),
                ])
            } else {
                timers
            }
        },
        PanelsIntent::ConfirmPlan => {
            if !state.is_modal_shown() {
                log::debug!("plan confirmation ignored: modal is not shown");
                return Task::none();
            }

            let mut requests = TimerRequests::new();
            state.controller_mut().close_modal(&mut requests);
            let timers = apply_timer_requests(state, requests);
            Task::batch([
                timers,
                Task::done(PanelsEvent::Effect(PanelsEffect::PlanConfirmed)),
            ])
        },
        PanelsIntent::SelectNavLink { index } => {
            let mut requests = TimerRequests::new();
            state.controller_mut().close_nav(&mut requests);
            let timers = apply_timer_requests(state, requests);
            Task::batch([
                timers,
                Task::done(PanelsEvent::Effect(
                    PanelsEffect::NavLinkSelected { index },
                )),
            ])
        },
        PanelsIntent::TimerElapsed(ticket) => {
            state.finish_timer(ticket);
            if !state.controller_mut().timer_elapsed(ticket) {
                log::trace!("stale timer {ticket} dropped");
            }
            Task::none()
        },
    }
}

/// Turn recorded timer requests into abortable sleep tasks.
fn apply_timer_requests(
    state: &mut PanelsState,
    requests: TimerRequests,
) -> Task<PanelsEvent> {
    let mut tasks = Vec::with_capacity(requests.len());
    for request in requests {
        match request {
            TimerRequest::Schedule(timer) => {
                tasks.push(spawn_timer(state, timer));
            },
            TimerRequest::Cancel(ticket) => state.cancel_timer(ticket),
        }
    }

    Task::batch(tasks)
}

fn spawn_timer(
    state: &mut PanelsState,
    timer: ScheduledTimer,
) -> Task<PanelsEvent> {
    let ScheduledTimer {
        ticket,
        surface,
        kind,
        delay,
    } = timer;
    log::trace!("spawning {surface} {kind:?} timer {ticket} in {delay:?}");

    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| PanelsEvent::Intent(PanelsIntent::TimerElapsed(ticket)),
    )
    .abortable();
    state.track_timer(ticket, handle);
    task
}
