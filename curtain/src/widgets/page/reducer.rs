use iced::Task;

use super::event::{PageEffect, PageEvent, PageIntent};
use super::state::PageState;

/// Reduce a page intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut PageState,
    intent: PageIntent,
) -> Task<PageEvent> {
    match intent {
        PageIntent::ChoosePlan { index } => {
            if !state.choose(index) {
                log::warn!("plan {index} does not exist");
                return Task::none();
            }
            Task::done(PageEvent::Effect(PageEffect::PlanChosen { index }))
        },
        PageIntent::ConfirmCandidate => {
            if !state.confirm_candidate() {
                log::debug!("nothing to confirm: no plan picked");
                return Task::none();
            }
            if let Some(plan) = state.confirmed() {
                log::info!("plan {} confirmed", plan.title);
            }
            Task::none()
        },
        PageIntent::DiscardCandidate => {
            state.discard_candidate();
            Task::none()
        },
        PageIntent::SelectSection { index } => {
            if !state.select_section(index) {
                log::warn!("nav section {index} does not exist");
            }
            Task::none()
        },
        PageIntent::NavTogglePressed => {
            Task::done(PageEvent::Effect(PageEffect::NavTogglePressed))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::settings::SettingsData;
    use crate::widgets::page::event::PageIntent;
    use crate::widgets::page::state::PageState;

    fn default_state() -> PageState {
        let settings = SettingsData::default();
        PageState::new(
            settings.plans().to_vec(),
            settings.nav_links().to_vec(),
        )
    }

    #[test]
    fn given_known_plan_when_chosen_then_it_becomes_candidate() {
        let mut state = default_state();

        let _task = reduce(&mut state, PageIntent::ChoosePlan { index: 1 });

        let candidate = state.candidate().expect("plan should be picked");
        assert_eq!(candidate.title, "Plus");
        assert!(state.confirmed().is_none());
    }

    #[test]
    fn given_unknown_plan_when_chosen_then_candidate_is_untouched() {
        let mut state = default_state();

        let _task = reduce(&mut state, PageIntent::ChoosePlan { index: 9 });

        assert!(state.candidate().is_none());
    }

    #[test]
    fn given_candidate_when_confirmed_then_it_moves_to_confirmed() {
        let mut state = default_state();
        let _task = reduce(&mut state, PageIntent::ChoosePlan { index: 2 });

        let _task = reduce(&mut state, PageIntent::ConfirmCandidate);

        assert!(state.candidate().is_none());
        let confirmed = state.confirmed().expect("plan should be confirmed");
        assert_eq!(confirmed.title, "Premium");
    }

    #[test]
    fn given_candidate_when_discarded_then_previous_confirmation_survives() {
        let mut state = default_state();
        let _task = reduce(&mut state, PageIntent::ChoosePlan { index: 0 });
        let _task = reduce(&mut state, PageIntent::ConfirmCandidate);
        let _task = reduce(&mut state, PageIntent::ChoosePlan { index: 1 });

        let _task = reduce(&mut state, PageIntent::DiscardCandidate);

        assert!(state.candidate().is_none());
        let confirmed = state.confirmed().expect("first plan should remain");
        assert_eq!(confirmed.title, "Free");
    }

    #[test]
    fn given_no_candidate_when_confirmed_then_nothing_is_confirmed() {
        let mut state = default_state();

        let _task = reduce(&mut state, PageIntent::ConfirmCandidate);

        assert!(state.confirmed().is_none());
    }

    #[test]
    fn given_section_index_when_selected_then_only_known_sections_stick() {
        let mut state = default_state();

        let _task = reduce(&mut state, PageIntent::SelectSection { index: 2 });
        assert_eq!(state.active_section(), Some(2));

        let _task = reduce(&mut state, PageIntent::SelectSection { index: 7 });
        assert_eq!(state.active_section(), Some(2));
    }
}
