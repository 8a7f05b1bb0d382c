mod app;
mod error;
mod routers;
mod settings;
mod style;
mod widgets;

use curtain_surface::PanelController;
use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::AppError;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = settings::load_initial_settings();
    let controller = match PanelController::new(
        settings.page_elements(),
        settings.transition_config(),
    ) {
        Ok(controller) => controller,
        Err(err) => {
            log::error!("page wiring failed: {err}");
            return Err(err.into());
        },
    };
    log::info!(
        "panels wired with {} transitions",
        controller.config().mode
    );

    iced::application(
        move || App::new(settings.clone(), controller.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .window(window::Settings {
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        ..window::Settings::default()
    })
    .run()?;

    Ok(())
}
