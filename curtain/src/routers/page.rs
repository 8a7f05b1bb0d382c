use curtain_surface::Trigger;
use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::page::{PageEffect, PageEvent};
use crate::widgets::panels::PanelsIntent;

/// Route a page event through the widget reducer or map its effect.
pub(crate) fn route(app: &mut App, event: PageEvent) -> Task<AppEvent> {
    match event {
        PageEvent::Intent(intent) => {
            app.widgets.page.reduce(intent).map(AppEvent::Page)
        },
        PageEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_effect(app: &mut App, effect: PageEffect) -> Task<AppEvent> {
    let trigger = match effect {
        PageEffect::PlanChosen { index } => {
            Trigger::PlanSelected { plan: index }
        },
        PageEffect::NavTogglePressed => Trigger::NavToggle,
    };

    app.widgets
        .panels
        .reduce(PanelsIntent::Trigger(trigger))
        .map(AppEvent::Panels)
}

#[cfg(test)]
mod tests {
    use curtain_surface::PanelController;

    use super::route;
    use crate::app::App;
    use crate::settings::SettingsData;
    use crate::widgets::page::{PageEffect, PageEvent, PageIntent};

    fn test_app() -> App {
        let settings = SettingsData::default();
        let controller = PanelController::new(
            settings.page_elements(),
            settings.transition_config(),
        )
        .expect("default page should wire");
        App::new(settings, controller).0
    }

    #[test]
    fn given_plan_chosen_effect_when_routed_then_modal_starts_opening() {
        let mut app = test_app();
        let _task = route(
            &mut app,
            PageEvent::Intent(PageIntent::ChoosePlan { index: 1 }),
        );

        let _task = route(
            &mut app,
            PageEvent::Effect(PageEffect::PlanChosen { index: 1 }),
        );

        assert!(app.widgets.panels.is_any_panel_shown());
        assert_eq!(
            app.widgets.page.vm().candidate.map(|plan| plan.title.as_str()),
            Some("Plus")
        );
    }

    #[test]
    fn given_nav_toggle_effect_when_routed_then_drawer_is_shown() {
        let mut app = test_app();

        let _task =
            route(&mut app, PageEvent::Effect(PageEffect::NavTogglePressed));

        assert!(app.widgets.panels.is_any_panel_shown());
    }
}
