use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use blankslate::config::{AppConfig, ConfigStore};
use blankslate::no_changes::NoChanges;
use blankslate::platform::Platform;

fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let repository = match std::env::args_os().nth(1) {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    let config = load_config();
    let platform = config.platform_or(Platform::current());
    let menu = match config.load_menu(platform) {
        Ok(menu) => Some(Arc::new(menu)),
        Err(err) => {
            error!("failed to load application menu: {err:#}");
            None
        }
    };

    info!(
        "rendering blank slate for {} on {:?}",
        repository.display(),
        platform
    );
    let mut panel = NoChanges::new(repository, platform, config.blank_slate);
    print!("{}", panel.render(menu.as_ref()));
    Ok(())
}

fn load_config() -> AppConfig {
    let loaded = ConfigStore::new().and_then(|store| store.load_or_default());
    match loaded {
        Ok(config) => config,
        Err(err) => {
            error!("failed to load config, using defaults: {err:#}");
            AppConfig::default()
        }
    }
}
