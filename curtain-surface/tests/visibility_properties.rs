use std::time::Duration;

use curtain_surface::{
    PageElements, PanelController, PanelPhase, SurfaceKind, TransitionConfig,
    TransitionMode, Trigger, VirtualTimers,
};

const MAX_SEQUENCE_LEN: usize = 5;

#[derive(Debug, Clone, Copy)]
enum Step {
    Click(Trigger),
    Wait(u64),
}

const STEPS: [Step; 7] = [
    Step::Click(Trigger::PlanSelected { plan: 0 }),
    Step::Click(Trigger::CloseAction),
    Step::Click(Trigger::Backdrop),
    Step::Click(Trigger::NavToggle),
    Step::Wait(5),
    Step::Wait(100),
    Step::Wait(250),
];

fn for_each_sequence(mut visit: impl FnMut(&[Step])) {
    let mut sequence = Vec::with_capacity(MAX_SEQUENCE_LEN);
    walk(&mut sequence, &mut visit);
}

fn walk(sequence: &mut Vec<Step>, visit: &mut impl FnMut(&[Step])) {
    visit(sequence);
    if sequence.len() == MAX_SEQUENCE_LEN {
        return;
    }
    for step in STEPS {
        sequence.push(step);
        walk(sequence, visit);
        sequence.pop();
    }
}

fn run(
    sequence: &[Step],
    mode: TransitionMode,
    mut timers: VirtualTimers,
) -> (PanelController, VirtualTimers) {
    let mut controller =
        PanelController::new(PageElements::all(), TransitionConfig::new(mode))
            .expect("full page should wire");

    for step in sequence {
        match *step {
            Step::Click(trigger) => controller.handle(trigger, &mut timers),
            Step::Wait(ms) => {
                timers.advance(Duration::from_millis(ms), &mut controller);
            },
        }
    }

    (controller, timers)
}

const MODES: [TransitionMode; 3] = [
    TransitionMode::Immediate,
    TransitionMode::InlineDisplay,
    TransitionMode::Transitioned,
];

fn hosts() -> [fn() -> VirtualTimers; 2] {
    [VirtualTimers::new, VirtualTimers::without_cancellation]
}

#[test]
fn given_any_trigger_sequence_when_timers_settle_then_backdrop_matches_panels()
{
    for mode in MODES {
        for host in hosts() {
            for_each_sequence(|sequence| {
                let (mut controller, mut timers) = run(sequence, mode, host());
                timers.settle(&mut controller);
                let state = controller.snapshot();

                assert!(state.is_settled(), "{sequence:?}: {state:?}");
                let any_open = state.modal == PanelPhase::Open
                    || state.nav_drawer == PanelPhase::Open;
                assert_eq!(
                    state.backdrop == PanelPhase::Open,
                    any_open,
                    "{mode} {sequence:?}: {state:?}"
                );
            });
        }
    }
}

#[test]
fn given_any_trigger_sequence_when_backdrop_clicked_then_both_panels_end_closed()
 {
    for host in hosts() {
        for_each_sequence(|sequence| {
            let (mut controller, mut timers) =
                run(sequence, TransitionMode::Transitioned, host());

            controller.handle(Trigger::Backdrop, &mut timers);
            assert!(!controller.phase(SurfaceKind::Modal).is_shown());
            assert!(!controller.phase(SurfaceKind::NavDrawer).is_shown());

            timers.settle(&mut controller);
            let state = controller.snapshot();
            assert_eq!(state.modal, PanelPhase::Closed, "{sequence:?}");
            assert_eq!(state.nav_drawer, PanelPhase::Closed, "{sequence:?}");
            assert_eq!(state.backdrop, PanelPhase::Closed, "{sequence:?}");
        });
    }
}

#[test]
fn given_any_trigger_sequence_when_last_click_opens_modal_then_modal_is_open_after_reveal_delay()
 {
    for host in hosts() {
        for_each_sequence(|sequence| {
            let (mut controller, mut timers) =
                run(sequence, TransitionMode::Transitioned, host());

            controller
                .handle(Trigger::PlanSelected { plan: 2 }, &mut timers);
            timers.advance(Duration::from_millis(10), &mut controller);

            assert_eq!(
                controller.phase(SurfaceKind::Modal),
                PanelPhase::Open,
                "{sequence:?}"
            );
            assert_eq!(
                controller.phase(SurfaceKind::Backdrop),
                PanelPhase::Open,
                "{sequence:?}"
            );
        });
    }
}
