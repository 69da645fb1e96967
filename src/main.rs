//! Hyperwire - n-cube wireframe viewer
//!
//! Headless driver: loads config and scene, runs the configured number of
//! ticks and reports what a renderer would have drawn.

use hyperwire::app::{App, AppError};
use hyperwire::config::AppConfig;

fn main() -> Result<(), AppError> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_logging("info");
            log::warn!("Failed to load config: {}. Using defaults.", e);
            return run(AppConfig::default());
        }
    };
    init_logging(&config.debug.log_level);
    run(config)
}

/// Initialize logging, letting `RUST_LOG` override the configured level
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(config: AppConfig) -> Result<(), AppError> {
    log::info!("Starting Hyperwire");
    let mut app = App::new(config)?;
    let stats = app.run();
    log::info!(
        "Finished: {} ticks, {} frame rebuilds, {} primitives in the last frame",
        stats.ticks,
        stats.rebuilds,
        stats.primitives
    );
    Ok(())
}
