use crate::settings::PlanData;

/// View model for the pricing page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageViewModel<'a> {
    pub(crate) plans: &'a [PlanData],
    pub(crate) nav_links: &'a [String],
    pub(crate) candidate: Option<&'a PlanData>,
    pub(crate) confirmed: Option<&'a PlanData>,
    pub(crate) active_section: Option<usize>,
}
