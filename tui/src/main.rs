use std::fs::File;

use anyhow::{Context, Result};
use fuel_core::AssetLoader;

mod app;
mod config;
mod state;
mod ui;

use config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::resolve();
    init_logging(&config);

    log::info!(
        "using model {} and encoders {}",
        config.assets.model.display(),
        config.assets.encoder.display()
    );

    let loader = AssetLoader::new(config.assets.clone());
    let assets = loader.load().inspect_err(|e| log::error!("{e}")).context(
        "cannot start: the model and encoder artifacts must be present and valid",
    )?;

    app::run::run(assets)
}

/// Sends logs to a file; the terminal belongs to the form.
fn init_logging(config: &AppConfig) {
    let file = match File::create(&config.log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "logging disabled, cannot create {}: {e}",
                config.log_file.display()
            );
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
