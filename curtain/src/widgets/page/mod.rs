mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{PageEffect, PageEvent, PageIntent};
use iced::Task;
pub(crate) use model::PageViewModel;
use state::PageState;

use crate::settings::PlanData;

/// Pricing page widget: header, plan cards and the plan choice.
pub(crate) struct PageWidget {
    state: PageState,
}

impl PageWidget {
    pub(crate) fn new(plans: Vec<PlanData>, nav_links: Vec<String>) -> Self {
        Self {
            state: PageState::new(plans, nav_links),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, intent: PageIntent) -> Task<PageEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> PageViewModel<'_> {
        PageViewModel {
            plans: self.state.plans(),
            nav_links: self.state.nav_links(),
            candidate: self.state.candidate(),
            confirmed: self.state.confirmed(),
            active_section: self.state.active_section(),
        }
    }

    /// Title of the confirmed plan, if any.
    pub(crate) fn confirmed_title(&self) -> Option<&str> {
        self.state.confirmed().map(|plan| plan.title.as_str())
    }
}
