use crate::settings::PlanData;

/// Pricing page content plus the user's plan and section choices.
#[derive(Debug, Default)]
pub(crate) struct PageState {
    plans: Vec<PlanData>,
    nav_links: Vec<String>,
    candidate: Option<usize>,
    confirmed: Option<usize>,
    active_section: Option<usize>,
}

impl PageState {
    pub(crate) fn new(plans: Vec<PlanData>, nav_links: Vec<String>) -> Self {
        Self {
            plans,
            nav_links,
            ..Self::default()
        }
    }

    pub(crate) fn plans(&self) -> &[PlanData] {
        &self.plans
    }

    pub(crate) fn nav_links(&self) -> &[String] {
        &self.nav_links
    }

    /// Plan picked but not yet confirmed.
    pub(crate) fn candidate(&self) -> Option<&PlanData> {
        self.candidate.and_then(|index| self.plans.get(index))
    }

    pub(crate) fn confirmed(&self) -> Option<&PlanData> {
        self.confirmed.and_then(|index| self.plans.get(index))
    }

    pub(crate) fn active_section(&self) -> Option<usize> {
        self.active_section
    }

    /// Record `index` as the candidate. Returns `false` for unknown plans.
    pub(crate) fn choose(&mut self, index: usize) -> bool {
        if index >= self.plans.len() {
            return false;
        }
        self.candidate = Some(index);
        true
    }

    /// Promote the candidate to the confirmed plan.
    pub(crate) fn confirm_candidate(&mut self) -> bool {
        match self.candidate.take() {
            Some(index) => {
                self.confirmed = Some(index);
                true
            },
            None => false,
        }
    }

    pub(crate) fn discard_candidate(&mut self) {
        self.candidate = None;
    }

    /// Mark a nav section active. Returns `false` for unknown sections.
    pub(crate) fn select_section(&mut self, index: usize) -> bool {
        if index >= self.nav_links.len() {
            return false;
        }
        self.active_section = Some(index);
        true
    }
}
