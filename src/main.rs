//! Pong entry point
//!
//! Sets up logging and hands control to the platform event loop.

use pong::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pong starting...");

    let settings = Settings::default();
    log::debug!("Settings: {:?}", settings);

    if let Err(e) = pong::platform::run(settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
