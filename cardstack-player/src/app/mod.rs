use std::sync::Arc;

use iced::{Application, Program as IcedProgram, Settings, Theme};

use crate::message::Message;
use crate::state::State;
use crate::{subscriptions, theme, update, view};

pub mod bootstrap;

pub use bootstrap::{AppConfig, ConfigError};

/// Build the carousel application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let window_size = config.window_size;
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Big Cats")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: window_size,
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("cardstack".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &State) -> Theme {
    theme::CardStackTheme::theme()
}
