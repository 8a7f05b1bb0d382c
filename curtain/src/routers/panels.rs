use curtain_surface::Trigger;
use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::page::PageIntent;
use crate::widgets::panels::{PanelsEffect, PanelsEvent, PanelsIntent};

/// Route a panels event through the widget reducer or map its effect.
pub(crate) fn route(app: &mut App, event: PanelsEvent) -> Task<AppEvent> {
    match event {
        PanelsEvent::Intent(intent) => {
            app.widgets.panels.reduce(intent).map(AppEvent::Panels)
        },
        PanelsEvent::Effect(effect) => route_effect(app, effect),
    }
}

/// Close whatever panel is open, as a backdrop click would.
pub(crate) fn dismiss(app: &mut App) -> Task<AppEvent> {
    route(
        app,
        PanelsEvent::Intent(PanelsIntent::Trigger(Trigger::Backdrop)),
    )
}

fn route_effect(app: &mut App, effect: PanelsEffect) -> Task<AppEvent> {
    let intent = match effect {
        PanelsEffect::PlanConfirmed => PageIntent::ConfirmCandidate,
        PanelsEffect::ModalDismissed => PageIntent::DiscardCandidate,
        PanelsEffect::NavLinkSelected { index } => {
            PageIntent::SelectSection { index }
        },
    };

    app.widgets.page.reduce(intent).map(AppEvent::Page)
}

#[cfg(test)]
mod tests {
    use curtain_surface::{PanelController, TransitionConfig, Trigger};

    use super::{dismiss, route};
    use crate::app::App;
    use crate::routers;
    use crate::settings::SettingsData;
    use crate::widgets::page::{PageEvent, PageIntent};
    use crate::widgets::panels::{PanelsEffect, PanelsEvent, PanelsIntent};

    fn test_app() -> App {
        let settings = SettingsData::default();
        let controller = PanelController::new(
            settings.page_elements(),
            TransitionConfig::immediate(),
        )
        .expect("default page should wire");
        App::new(settings, controller).0
    }

    fn choose_plan(app: &mut App, index: usize) {
        let _task = routers::page::route(
            app,
            PageEvent::Intent(PageIntent::ChoosePlan { index }),
        );
        let _task = route(
            app,
            PanelsEvent::Intent(PanelsIntent::Trigger(
                Trigger::PlanSelected { plan: index },
            )),
        );
    }

    #[test]
    fn given_plan_confirmed_effect_when_routed_then_candidate_is_confirmed() {
        let mut app = test_app();
        choose_plan(&mut app, 0);

        let _task =
            route(&mut app, PanelsEvent::Effect(PanelsEffect::PlanConfirmed));

        assert_eq!(app.widgets.page.confirmed_title(), Some("Free"));
        assert!(app.widgets.page.vm().candidate.is_none());
    }

    #[test]
    fn given_modal_dismissed_effect_when_routed_then_candidate_is_discarded() {
        let mut app = test_app();
        choose_plan(&mut app, 2);

        let _task =
            route(&mut app, PanelsEvent::Effect(PanelsEffect::ModalDismissed));

        assert!(app.widgets.page.vm().candidate.is_none());
        assert_eq!(app.widgets.page.confirmed_title(), None);
    }

    #[test]
    fn given_nav_link_effect_when_routed_then_section_becomes_active() {
        let mut app = test_app();

        let _task = route(
            &mut app,
            PanelsEvent::Effect(PanelsEffect::NavLinkSelected { index: 1 }),
        );

        assert_eq!(app.widgets.page.vm().active_section, Some(1));
    }

    #[test]
    fn given_open_modal_when_dismissed_then_all_panels_close() {
        let mut app = test_app();
        choose_plan(&mut app, 1);
        assert!(app.widgets.panels.is_any_panel_shown());

        let _task = dismiss(&mut app);

        assert!(!app.widgets.panels.is_any_panel_shown());
    }
}
