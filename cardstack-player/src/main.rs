use cardstack_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("cardstack_player", LevelFilter::Debug)
        .filter_module("cardstack_core", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}; falling back to default configuration");
            AppConfig::default()
        }
    };
    log::info!(
        "Starting carousel (transition {:?}, easing {}, images from {:?})",
        config.transition.duration,
        config.transition.easing,
        config.image_dir
    );

    app::application(config).run()
}
